//! Flat text file I/O for graphs.

pub mod reader;
pub mod writer;

pub use reader::TextReader;
pub use writer::TextWriter;
