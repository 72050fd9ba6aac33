//! Dealer and dealer-group signup.

pub mod service;

pub use service::SignupService;
