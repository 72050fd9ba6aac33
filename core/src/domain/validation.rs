//! Pure field validation and normalization helpers.
//!
//! These functions have no side effects and no I/O; the signup service
//! runs them before touching any repository. Several fields accept
//! comma-separated lists (additional emails, phones, websites), in which
//! case every element must validate.

use once_cell::sync::Lazy;
use regex::Regex;

use super::entities::dealer::{Country, DealerApplication};
use super::entities::dealer_group::GroupApplication;
use crate::errors::FieldError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^<>()\[\]\\.,;:\s@]+(\.[^<>()\[\]\\.,;:\s@]+)*@([A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b[-a-zA-Z0-9@:%_+.~#?&/=]*$")
        .unwrap()
});

/// NANP phone in normalized `xxx-xxx-xxxx` form
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());

/// Captures the hostname out of an http(s) URL
static URL_HOST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://([^/:?#]+)").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate an email field that may hold a comma-separated list
pub fn is_valid_email_list(value: &str) -> bool {
    if value.contains(',') {
        value.split(',').all(|part| is_valid_email(part.trim()))
    } else {
        is_valid_email(value)
    }
}

pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Validate a website field that may hold a comma-separated list
pub fn is_valid_url_list(value: &str) -> bool {
    if value.contains(',') {
        value.split(',').all(|part| is_valid_url(part.trim()))
    } else {
        is_valid_url(value)
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    if phone.contains(',') {
        phone.split(',').all(|part| PHONE_REGEX.is_match(part.trim()))
    } else {
        PHONE_REGEX.is_match(phone)
    }
}

pub fn is_valid_country(country: &str) -> bool {
    Country::parse(country).is_some()
}

/// Normalize a single NANP phone number to `xxx-xxx-xxxx`.
///
/// Strips non-digits and a leading `1` country prefix. Returns `None`
/// when the remaining digits do not form a ten-digit number.
fn format_single_phone(input: &str) -> Option<String> {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }
    if digits.len() != 10 {
        return None;
    }
    Some(format!(
        "{}-{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..10]
    ))
}

/// Normalize a phone field, preserving comma-separated lists.
///
/// Returns `None` if any element fails to normalize.
pub fn format_phone_number(input: &str) -> Option<String> {
    if input.contains(',') {
        let parts: Option<Vec<String>> = input.split(',').map(format_single_phone).collect();
        return parts.map(|p| p.join(","));
    }
    format_single_phone(input)
}

/// Extract the www-stripped, lowercased hostname from an http(s) URL
pub fn website_domain(url: &str) -> Option<String> {
    let host = URL_HOST_REGEX.captures(url)?.get(1)?.as_str().to_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

/// Extract the domain part of an email address
pub fn email_domain(email: &str) -> Option<String> {
    email.rsplit_once('@').map(|(_, d)| d.to_lowercase())
}

/// Validate a dealer application, returning one error per offending field.
///
/// Phones are expected to be normalized (`format_phone_number`) before
/// this runs.
pub fn validate_dealer(application: &DealerApplication) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if application.dealership_name.trim().is_empty() {
        errors.push(FieldError::new(
            "dealership_name",
            "Dealership name required.",
        ));
    }
    if !is_valid_phone(&application.dealership_phone) {
        errors.push(FieldError::new(
            "dealership_phone",
            "Please enter a valid phone number.",
        ));
    }
    if !is_valid_email_list(&application.dealership_lead_email) {
        errors.push(FieldError::new(
            "dealership_lead_email",
            "Please enter a valid email.",
        ));
    }
    if !is_valid_email_list(&application.dealership_billing_email) {
        errors.push(FieldError::new(
            "dealership_billing_email",
            "Please enter a valid email.",
        ));
    }
    if application.dealership_website.contains(',')
        || !is_valid_url(&application.dealership_website)
    {
        errors.push(FieldError::new(
            "dealership_website",
            "Please enter a valid website URL.",
        ));
    }
    if let Some(additional) = &application.dealership_additional_websites {
        if !additional.is_empty() && !is_valid_url_list(additional) {
            errors.push(FieldError::new(
                "dealership_additional_websites",
                "Please enter a valid website URL.",
            ));
        }
    }
    if !is_valid_country(&application.dealership_country) {
        errors.push(FieldError::new(
            "dealership_country",
            "Please enter either US or CA for country.",
        ));
    }
    if application.contact_full_name.trim().is_empty() {
        errors.push(FieldError::new("contact_full_name", "Contact name required."));
    }
    if !is_valid_email(&application.contact_email) {
        errors.push(FieldError::new(
            "contact_email",
            "Please enter a valid email.",
        ));
    }
    if !is_valid_phone(&application.contact_phone) {
        errors.push(FieldError::new(
            "contact_phone",
            "Please enter a valid phone number.",
        ));
    }

    errors
}

/// Validate a dealer-group application
pub fn validate_group(application: &GroupApplication) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if application.dealer_group_name.trim().is_empty() {
        errors.push(FieldError::new(
            "dealer_group_name",
            "Dealer group name required.",
        ));
    }
    if !is_valid_url(&application.dealer_group_website) {
        errors.push(FieldError::new(
            "dealer_group_website",
            "Please enter a valid website URL.",
        ));
    }

    errors
}
