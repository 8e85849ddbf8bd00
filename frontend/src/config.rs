/// Configuration for the portfolio frontend.
///
/// All values are resolved at compile time from environment variables so
/// deployments can swap endpoints without code changes.

/// Remote endpoint serving the bilingual content document.
pub const CONTENT_URL: &str = match option_env!("PORTFOLIO_CONTENT_URL") {
    Some(url) => url,
    None => "https://tome888.github.io/portfolio-api/db.json",
};

/// Delivery provider REST endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Delivery provider service identifier. Opaque to this app.
pub const EMAILJS_SERVICE_ID: &str = match option_env!("PORTFOLIO_EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => "service_portfolio",
};

/// Delivery provider template identifier. Opaque to this app.
pub const EMAILJS_TEMPLATE_ID: &str = match option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => "template_contact",
};

/// Delivery provider public key. Opaque to this app.
pub const EMAILJS_PUBLIC_KEY: &str = match option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => "public_key_dev",
};
