//! SMTP mailer implementation of the core `EmailSender` trait.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use ob_core::errors::{DomainResult, OnboardingError};
use ob_core::services::notification::{EmailSender, VerificationEmail};
use ob_shared::config::smtp::SmtpConfig;

use super::templates::VerificationEmailContent;

/// Sends verification emails through an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    support_url: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, support_url: String) -> DomainResult<Self> {
        let mut builder = if config.use_tls {
            let tls_params = TlsParameters::new(config.host.clone())
                .map_err(OnboardingError::mail)?;

            // Port 465 is implicit TLS (SMTPS), everything else STARTTLS
            if config.port == 465 {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                    .map_err(OnboardingError::mail)?
                    .port(config.port)
                    .tls(Tls::Wrapper(tls_params))
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(OnboardingError::mail)?
                    .port(config.port)
                    .tls(Tls::Required(tls_params))
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
        };

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: format!("{} <{}>", config.from_name, config.from_address),
            support_url,
        })
    }
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send_verification(&self, email: &VerificationEmail) -> DomainResult<()> {
        let content = VerificationEmailContent::new(email, &self.support_url);

        let message = Message::builder()
            .from(self.from.parse().map_err(OnboardingError::mail)?)
            .to(email.to.parse().map_err(OnboardingError::mail)?)
            .subject(content.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(content.text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(content.html),
                    ),
            )
            .map_err(OnboardingError::mail)?;

        self.transport
            .send(message)
            .await
            .map_err(OnboardingError::mail)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mailer_creation_no_tls() {
        let config = SmtpConfig {
            host: "localhost".to_string(),
            port: 25,
            ..Default::default()
        };
        assert!(SmtpMailer::new(&config, "https://support.test".to_string()).is_ok());
    }

    #[tokio::test]
    async fn test_mailer_creation_with_credentials() {
        let config = SmtpConfig {
            host: "localhost".to_string(),
            port: 587,
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Default::default()
        };
        assert!(SmtpMailer::new(&config, "https://support.test".to_string()).is_ok());
    }
}
