use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, Result, Chainable};
use crate::data::Source;

/// A textual data format that deserializes into typed values.
pub trait Format: Sized {
    /// The data format's error type.
    type Error: serde::de::Error + ErrorDetail + 'static;

    /// The format's human-readable name, used in diagnostics.
    const NAME: &'static str;

    fn from_str<T: DeserializeOwned>(string: &str) -> Result<T, Self::Error>;

    /// Reads `input` and parses it as `T`. Failures name the input's path,
    /// if it has one.
    fn read<I: Source, T: DeserializeOwned>(input: I) -> Result<T> {
        let path = input.path().map(|p| p.display().to_string());
        let string = input.read()?;
        Self::from_str(&string).chain_with(|| match path {
            Some(path) => error!(format!("invalid {}", Self::NAME), "file path" => path),
            None => error!(format!("invalid {}", Self::NAME)),
        })
    }
}

macro_rules! impl_format {
    ($name:ident ($display:literal) : $func:expr, $E:ty) => (
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl Format for $name {
            type Error = $E;

            const NAME: &'static str = $display;

            fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml ("TOML"): toml::from_str, toml::de::Error);
impl_format!(Json ("JSON"): serde_json::from_str, serde_json::error::Error);
