//! Error-to-HTTP translation.

pub mod error;
