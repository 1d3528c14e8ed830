pub mod format;

pub use format::{output, output_to_writer};
