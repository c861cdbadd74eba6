use std::{fs, io};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::fmt::Debug;

use crate::error::{Result, Chainable};

/// Something text can be written to.
pub trait Sink: Debug {
    fn write(&self, content: &str) -> Result<()>;
}

impl Sink for fs::File {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = io::BufWriter::new(self);
        file.write_all(content.as_bytes())?;
        Ok(file.flush()?)
    }
}

impl Sink for &Path {
    fn write(&self, content: &str) -> Result<()> {
        fs::File::create(self)
            .chain(error! {
                "failed to open/create file for writing",
                "file path" => self.display()
            })?
            .write(content)
            .chain_with(|| error! {
                "failed to write file",
                "file path" => self.display()
            })
    }
}

impl Sink for PathBuf {
    fn write(&self, content: &str) -> Result<()> {
        <&Path as Sink>::write(&self.as_path(), content)
    }
}

impl Sink for io::Stdout {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = self.lock();
        stdout.write_all(content.as_bytes())?;
        Ok(stdout.flush()?)
    }
}

impl<T: Sink> Sink for &T {
    fn write(&self, content: &str) -> Result<()> {
        <T as Sink>::write(self, content)
    }
}
