#![warn(clippy::pedantic)]

pub mod bin_writer;

pub use bin_writer::BinWriter;
