//! Background work
//!
//! - Simulated upload ticker

pub mod upload_runner;

pub use upload_runner::UploadRunner;
