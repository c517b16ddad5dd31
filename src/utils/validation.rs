use crate::utils::error::{CleanerError, Result};
use url::Url;

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CleanerError::config(format!("{} is required", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CleanerError::config(format!(
                "invalid {}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(CleanerError::config(format!(
            "invalid {}: {}",
            field_name, e
        ))),
    }
}

pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CleanerError::config(format!("{} is required", field_name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base URL", "https://example.com").is_ok());
        assert!(validate_url("base URL", "http://localhost:8080/api/greader.php").is_ok());
        assert!(validate_url("base URL", "").is_err());
        assert!(validate_url("base URL", "invalid-url").is_err());
        assert!(validate_url("base URL", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_url_names_field() {
        let err = validate_url("base URL", "").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: base URL is required");

        let err = validate_url("base URL", "not a url").unwrap_err();
        assert!(err.to_string().contains("invalid base URL"));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("username", "user").is_ok());

        let err = validate_required("password", "").unwrap_err();
        assert!(matches!(err, CleanerError::ConfigError { .. }));
        assert!(err.to_string().contains("password is required"));
    }
}
