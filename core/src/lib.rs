//! Core business logic and domain layer for the dealer onboarding backend.
//!
//! This crate is infrastructure-free: persistence and mail delivery are
//! expressed as traits (`repositories`, `services::notification`) and the
//! services operate purely against those interfaces.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
