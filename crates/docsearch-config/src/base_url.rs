//! Base URL validation.

use url::Url;

use crate::ConfigError;

/// Default base URL for generated record URLs.
pub const DEFAULT_BASE_URL: &str = "https://nuxt.com/docs";

/// Validates a base URL and strips trailing slashes.
///
/// The URL must be absolute, use `http` or `https`, and carry neither a query
/// nor a fragment, since record paths and fragments are appended to it.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment".to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(normalize_base_url(DEFAULT_BASE_URL).unwrap(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        assert_eq!(
            normalize_base_url("https://example.com/docs//").unwrap(),
            "https://example.com/docs"
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = normalize_base_url("/docs").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_scheme_rejected() {
        let err = normalize_base_url("ftp://example.com/docs").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_fragment_rejected() {
        assert!(normalize_base_url("https://example.com/docs#top").is_err());
        assert!(normalize_base_url("https://example.com/docs?v=1").is_err());
    }
}
