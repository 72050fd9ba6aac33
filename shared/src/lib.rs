//! Shared types and configuration for the dealer onboarding backend.

pub mod config;
pub mod types;
