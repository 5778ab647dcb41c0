// SPDX-License-Identifier: GPL-3.0-only
use url::Url;
use anyhow::{Result, Context};

/// Maximum stored length of a map or image link
pub const MAX_URL_LENGTH: usize = 500;

/// Validate a link stored on a cafe record
///
/// Checks:
/// - Length fits the column
/// - Parses as an absolute URL
/// - Only allows http/https schemes
/// - Has a host
pub fn validate_link(url_str: &str) -> Result<()> {
    if url_str.chars().count() > MAX_URL_LENGTH {
        return Err(anyhow::anyhow!("exceeds maximum length of {} characters", MAX_URL_LENGTH));
    }

    let url = Url::parse(url_str)
        .context("is not a valid URL")?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(anyhow::anyhow!(
                "has scheme {} (only http and https are allowed)",
                scheme
            ));
        }
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(anyhow::anyhow!("must have a host")),
    }
}
