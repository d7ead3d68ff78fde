#![warn(clippy::pedantic)]

pub mod error;
pub mod listener;
pub mod parser;

pub use error::{ErrorKind, ParseError};
pub use listener::DataListener;
pub use parser::{ParseSummary, Parser};
