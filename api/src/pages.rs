//! Server-rendered HTML pages shown to users who click emailed links.

use ob_core::domain::entities::dealer::Country;
use ob_shared::config::onboarding::OnboardingConfig;

const ERROR_HEADING: &str = "Hmm... There seems to be a problem.";

/// Wrap a heading and body in the shared page chrome
pub fn render_page(heading: &str, body: &str) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, Helvetica, sans-serif;">
	<div style="padding-left: 20px;padding-right: 20px;">
	<h1>{heading}</h1>
	<p>{body}</p>
	</div>
</body>
</html>"#
    )
}

/// URLs needed to render the link-click pages
#[derive(Debug, Clone)]
pub struct PageContext {
    pub support_url: String,
    pub checkout_url_us: String,
    pub checkout_url_ca: String,
}

impl PageContext {
    pub fn new(config: &OnboardingConfig) -> Self {
        Self {
            support_url: config.support_url.clone(),
            checkout_url_us: config.checkout_url_us.clone(),
            checkout_url_ca: config.checkout_url_ca.clone(),
        }
    }

    /// Per-country checkout URL with the billing email prefilled
    pub fn checkout_url(&self, country: Country, billing_email: &str) -> String {
        let base = match country {
            Country::Us => &self.checkout_url_us,
            Country::Ca => &self.checkout_url_ca,
        };
        format!("{base}?prefilled_email={billing_email}")
    }

    pub fn bad_link_page(&self) -> String {
        render_page(
            ERROR_HEADING,
            &format!(
                "It looks like you're using a badly formed link. Make sure you are visiting \
                 the full URL provided in your verification email.<br><br>If the problem \
                 persists, <a href='{}' class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }

    pub fn try_again_page(&self) -> String {
        render_page(
            ERROR_HEADING,
            &format!(
                "Please try again later. If the problem persists, \
                 <a href='{}' class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }

    pub fn support_page(&self) -> String {
        render_page(
            ERROR_HEADING,
            &format!(
                "Please <a href='{}' class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }

    pub fn expired_page(&self, resend_url: &str) -> String {
        render_page(
            "Oops! Your link has expired.",
            &format!(
                "Click here to <a href=\"{resend_url}\" class='text-primary'>resend \
                 verification email</a>.<br><br>Make sure you click the link in the email \
                 within 24 hours. If the problem persists, <a href='{}' \
                 class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }

    pub fn already_verified_page(&self) -> String {
        render_page(
            "Oops! You're already verified.",
            &format!(
                "Looks like this email address was already verified. If you think this is \
                 a mistake, please <a href='{}' class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }

    pub fn verified_page(&self, checkout_url: &str) -> String {
        render_page(
            "Thank You! Your email has been verified.",
            &format!(
                r#"To complete your account setup and start your free trial, add a payment method by clicking the button below.</p>
				<table border="0" cellspacing="0" cellpadding="0" style="margin-left: auto;margin-right: auto;">
				<tr>
					<td style="padding: 12px 18px 12px 18px; border-radius:5px; background-color: #FFD750;" align="center">
						<a rel="noopener" target="_blank" href="{checkout_url}" style="font-size: 18px; font-family: Helvetica, Arial, sans-serif; font-weight: bold; color: #826441; text-decoration: none; display: inline-block;">Activate Free Trial</a>
					</td>
				</tr>
			</table>
			<p>You will be brought to the check out page, where you can add a payment method for your new account. No charges will be processed during the trial period, and you can cancel anytime before it ends."#
            ),
        )
    }

    pub fn resent_page(&self) -> String {
        render_page(
            "Verification Email Resent",
            &format!(
                "We've sent a new verification email to your email address originally \
                 provided during sign-up. Make sure to click the link in the email within \
                 24 hours. Any previous verification emails will no longer work.<br><br>If \
                 you think you may have provided the wrong email address, or have any other \
                 issues, please <a href='{}' class='text-primary'>contact support</a>.",
                self.support_url
            ),
        )
    }
}
