//! Homework-status API: HTTP client and response model.

pub mod client;
pub mod types;

pub use client::{StatusClient, DEFAULT_ENDPOINT};
pub use types::{
    current_date, describe_status, validate_response, HomeworkRecord, HomeworkStatus,
};
