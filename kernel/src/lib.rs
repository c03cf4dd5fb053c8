pub mod model;
pub mod repository;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;
