pub mod decode;
pub mod entity;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
