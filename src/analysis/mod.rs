pub mod classes;
pub mod functions;

pub use classes::{class_names, extract_class_names};
pub use functions::{extract_function_names, function_names};
