//! Verification email content.

use ob_core::services::notification::VerificationEmail;

/// Rendered subject, plaintext and HTML bodies for one verification email
pub struct VerificationEmailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl VerificationEmailContent {
    pub fn new(email: &VerificationEmail, support_url: &str) -> Self {
        let subject = "Please Verify Your Email".to_string();

        let text = format!(
            "\
Welcome, {name}!

There are a few items to take care of before we get started.
Here's what you need to do:

1. Verify Your Email: Go to the URL below to verify your account.
2. Activate Free Trial: Once your email is verified, you can proceed to the checkout page to add a payment method and activate your free trial. We will also send you an email with the checkout link if you'd like to come back and do this later.

{verify_url}

If you did not request this account, you can safely ignore this message.
Please note this validation link is valid for 24 hours. In the event the link has expired, please go to: {resend_url}

Need help? Contact support: {support_url}
",
            name = email.contact_name,
            verify_url = email.verify_url,
            resend_url = email.resend_url,
            support_url = support_url,
        );

        let html = format!(
            r#"<html>
	<body style="font-family: Arial, Helvetica, sans-serif;padding: 20px;">
		<p style="padding-top: 30px;">Welcome, {name}!</p>
		<p>There are a few items to take care of before we get started.
		<br />
		Here's what you need to do:</p>
		<p><ol>
			<li>Verify Your Email: Click the button below to verify your account.</li>
			<li>Activate Free Trial: Once your email is verified, you can proceed to the checkout page to add a payment method and activate your free trial. We will also send you an email with the checkout link if you'd like to come back and do this later.</li>
		</ol></p>
		<p style="text-align: center;">
		<table border="0" cellspacing="0" cellpadding="0" style="margin-left: auto;margin-right: auto;">
			<tr>
				<td style="padding: 12px 18px 12px 18px; border-radius:5px; background-color: #FFD750;" align="center">
					<a rel="noopener" target="_blank" href="{verify_url}" style="font-size: 18px; font-family: Helvetica, Arial, sans-serif; font-weight: bold; color: #826441; text-decoration: none; display: inline-block;">Verify Your Email</a>
				</td>
			</tr>
		</table>
		</p>
		<p>
			If you did not request this account, you can safely ignore this message.
			<br />
			Please note this validation link is valid for 24 hours. In the event the link has expired, <a href="{resend_url}">click here to resend verification email</a>.
		</p>
		<p>Need help? <a href="{support_url}">Contact support</a>.</p>
	</body>
</html>"#,
            name = email.contact_name,
            verify_url = email.verify_url,
            resend_url = email.resend_url,
            support_url = support_url,
        );

        Self {
            subject,
            text,
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VerificationEmail {
        VerificationEmail {
            to: "sam@example.com".to_string(),
            contact_name: "Sam Carter".to_string(),
            verify_url: "https://onboarding.test/verify-email?data=abc".to_string(),
            resend_url: "https://onboarding.test/resend-verification-email?data=def".to_string(),
        }
    }

    #[test]
    fn test_content_embeds_links_and_name() {
        let content = VerificationEmailContent::new(&sample(), "https://support.test");

        assert_eq!(content.subject, "Please Verify Your Email");
        assert!(content.text.contains("Welcome, Sam Carter!"));
        assert!(content.text.contains("verify-email?data=abc"));
        assert!(content.text.contains("resend-verification-email?data=def"));
        assert!(content.html.contains(r#"href="https://onboarding.test/verify-email?data=abc""#));
        assert!(content.html.contains("https://support.test"));
    }
}
