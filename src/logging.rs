//! Logging helpers
//!
//! Subscriber setup for the reference host and redaction of credentials
//! from text that ends up in log lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Secret patterns for redaction
static SECRET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Bearer tokens
        Regex::new(r"(?i)bearer\s+[a-zA-Z0-9._~+/=-]+").unwrap(),
        // key=value style tokens
        Regex::new(r#"(?i)(api[_-]?key|token|secret)\s*[=:]\s*['"]?([^'"\s&]+)['"]?"#).unwrap(),
    ]
});

/// Redact credentials from text
pub fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for pattern in SECRET_PATTERNS.iter() {
        result = pattern.replace_all(&result, "[REDACTED]").to_string();
    }

    result
}

/// Initialize the logging/tracing subsystem
pub fn init_logging(debug: bool, json: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
