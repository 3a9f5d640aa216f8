pub mod compose;
pub mod config;
pub mod decompose;
pub mod error;
pub mod mnemonic;
pub mod paths;
pub mod range;
pub mod store;

pub use error::{DominicError, Result};
