//! Record file input.

pub mod reader;

pub use reader::RecordReader;
