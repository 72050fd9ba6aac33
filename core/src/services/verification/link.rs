//! Verification link payload codec.
//!
//! Link payloads are JSON, base64-encoded with the URL-safe unpadded
//! alphabet so they survive query strings untouched. Decoding is
//! deliberately lossy about causes: any malformed input maps to one
//! `MalformedLink` error so callers cannot probe the format.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::validation::is_valid_email;
use crate::errors::{DomainResult, OnboardingError};

/// Payload carried by a verify link: the address plus its one-time secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPayload {
    pub email: String,
    pub key: String,
}

/// Payload carried by a resend link: the address alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendPayload {
    pub email: String,
}

fn encode<T: Serialize>(payload: &T) -> DomainResult<String> {
    let json = serde_json::to_vec(payload).map_err(OnboardingError::internal)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode<T: for<'de> Deserialize<'de>>(data: &str) -> DomainResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(data)
        .map_err(|_| OnboardingError::MalformedLink)?;
    serde_json::from_slice(&bytes).map_err(|_| OnboardingError::MalformedLink)
}

pub fn encode_verify(payload: &VerifyPayload) -> DomainResult<String> {
    encode(payload)
}

pub fn encode_resend(payload: &ResendPayload) -> DomainResult<String> {
    encode(payload)
}

/// Decode a verify payload, rejecting payloads whose email is not a
/// plausible address.
pub fn decode_verify(data: &str) -> DomainResult<VerifyPayload> {
    let payload: VerifyPayload = decode(data)?;
    if !is_valid_email(&payload.email) || payload.key.is_empty() {
        return Err(OnboardingError::MalformedLink);
    }
    Ok(payload)
}

pub fn decode_resend(data: &str) -> DomainResult<ResendPayload> {
    let payload: ResendPayload = decode(data)?;
    if !is_valid_email(&payload.email) {
        return Err(OnboardingError::MalformedLink);
    }
    Ok(payload)
}
