//! Application services orchestrating the onboarding flow.

pub mod notification;
pub mod search;
pub mod signup;
pub mod verification;
