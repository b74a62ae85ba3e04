#![allow(dead_code)]

pub use project_tracker_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
