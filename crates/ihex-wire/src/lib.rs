#![warn(clippy::pedantic)]

pub mod checksum;
pub mod error;
pub mod framing;
pub mod record;
pub mod record_type;

pub use error::{MalformedReason, RecordError};
pub use record::Record;
pub use record_type::RecordType;
