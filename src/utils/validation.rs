use crate::utils::error::{EkmanError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EkmanError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EkmanError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a physical input parameter: finite and inside `[min, max]`.
pub fn validate_parameter(field_name: &str, value: f64, range: [f64; 2]) -> Result<()> {
    let [min, max] = range;
    let reason = if !value.is_finite() {
        "Value must be a finite number".to_string()
    } else if value < min || value > max {
        format!("Value must be between {} and {}", min, max)
    } else {
        return Ok(());
    };

    Err(EkmanError::InvalidParameterError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("client.endpoint", "https://example.com").is_ok());
        assert!(validate_url("client.endpoint", "http://localhost:5001").is_ok());
        assert!(validate_url("client.endpoint", "").is_err());
        assert!(validate_url("client.endpoint", "invalid-url").is_err());
        assert!(validate_url("client.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("client.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("client.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_parameter() {
        assert!(validate_parameter("depth", 100.0, [10.0, 1000.0]).is_ok());
        assert!(validate_parameter("depth", 10.0, [10.0, 1000.0]).is_ok());
        assert!(validate_parameter("depth", 5.0, [10.0, 1000.0]).is_err());
        assert!(validate_parameter("depth", f64::NAN, [10.0, 1000.0]).is_err());
        assert!(validate_parameter("latitude", f64::INFINITY, [-90.0, 90.0]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.bind", "0.0.0.0:5001").is_ok());
        assert!(validate_non_empty_string("server.bind", "   ").is_err());
    }
}
