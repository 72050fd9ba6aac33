//! SMTP delivery of verification emails.

pub mod smtp;
pub mod templates;

pub use smtp::SmtpMailer;
pub use templates::VerificationEmailContent;
