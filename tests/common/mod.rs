#![allow(dead_code)] // each test binary uses a different slice of the helpers

pub mod asserts;
pub mod fixtures;

pub use asserts::*;
pub use fixtures::*;
