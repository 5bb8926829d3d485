pub mod config;
pub mod doctors;
pub mod error;
pub mod imagegen;
pub mod photos;
pub mod server;

pub use error::{Error, Result};
