pub mod common;
pub mod errors;
pub mod hero;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::Result;
