//! Small shared utilities: id generation and JSON serialization glue.

pub mod id_generator;
pub mod json_ext;
