//! Request and response shapes for the HTTP surface.

pub mod onboarding;

pub use onboarding::{EncodedLinkQuery, NewDealerGroupRequest, NewDealerRequest, SearchQuery};
