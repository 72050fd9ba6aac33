//! Shared type definitions used across crates.

pub mod response;

pub use response::{MessageBody, MessageResponse};
