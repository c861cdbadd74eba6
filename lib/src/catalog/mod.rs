mod category;
mod record;
mod catalog;
mod classify;

pub use category::*;
pub use record::*;
pub use catalog::*;
pub use classify::*;

#[cfg(test)]
pub(crate) mod fixtures;
