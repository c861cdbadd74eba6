use std::path::PathBuf;
use std::process::ExitCode;

use pagegen::{Output, Pipeline};

mod config;

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Render a release tree's library catalog pages.
        cmd genpages {
            /// Root of the release tree. Defaults to the current directory.
            optional root: PathBuf
            /// Read configuration from this TOML file.
            optional -c, --config path: PathBuf
            /// Print the rendered pages instead of rewriting the templates.
            optional --stdout
            /// Render as a development snapshot.
            optional --develop
            /// Log debug events.
            optional -v, --verbose
        }
    }
}

pub fn main() -> ExitCode {
    let flags = flags::Genpages::from_env_or_exit();
    init_tracing(flags.verbose);

    let root = flags.root.unwrap_or_else(|| PathBuf::from("."));
    let output = match flags.stdout {
        true => Output::Stdout,
        false => Output::InPlace,
    };

    let result = config::discover(&root, flags.config.as_deref(), flags.develop)
        .and_then(|config| Pipeline::new(&root, config).run(output));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout is reserved for `--stdout` pages.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
