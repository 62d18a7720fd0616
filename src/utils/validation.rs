use crate::utils::error::{ConsumerError, Result};
use crate::utils::type_check::{is_numeric, Value};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConsumerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConsumerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConsumerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConsumerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConsumerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ConsumerError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConsumerError::InvalidConfigValueError {
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
        return Err(ConsumerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 解析查詢參數中的非負整數（例如 amount、movie_id）
pub fn parse_non_negative_integer(field_name: &str, raw: &str) -> Result<u64> {
    if !is_numeric(&Value::from(raw)) {
        return Err(ConsumerError::validation(format!(
            "The {} parameter must be a number, got '{}'",
            field_name, raw
        )));
    }

    raw.trim().parse::<u64>().map_err(|_| {
        ConsumerError::validation(format!(
            "The {} parameter must be a positive integer, got '{}'",
            field_name, raw
        ))
    })
}

/// 解析以逗號分隔的 id 列表，空白項目會被忽略
pub fn parse_id_list(field_name: &str, raw: &str) -> Result<Vec<u64>> {
    let mut ids = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let id = parse_non_negative_integer(field_name, item)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    if ids.is_empty() {
        return Err(ConsumerError::validation(format!(
            "The {} parameter should be a comma separated list of movie ids",
            field_name
        )));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("service.base_url", "https://example.com/api").is_ok());
        assert!(validate_url("service.base_url", "http://localhost:5000/api").is_ok());
        assert!(validate_url("service.base_url", "").is_err());
        assert!(validate_url("service.base_url", "invalid-url").is_err());
        assert!(validate_url("service.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("service.timeout_seconds", 30, 1, 300).is_ok());
        assert!(validate_range("service.timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("service.timeout_seconds", 301, 1, 300).is_err());
    }

    #[test]
    fn test_parse_non_negative_integer() {
        assert_eq!(parse_non_negative_integer("amount", "5").unwrap(), 5);
        assert_eq!(parse_non_negative_integer("amount", " 12 ").unwrap(), 12);
        assert!(parse_non_negative_integer("amount", "").is_err());
        assert!(parse_non_negative_integer("amount", "12px").is_err());
        assert!(parse_non_negative_integer("amount", "-3").is_err());
        assert!(parse_non_negative_integer("amount", "2.5").is_err());
    }

    #[test]
    fn test_parse_id_list_skips_blanks_and_duplicates() {
        assert_eq!(parse_id_list("movie_ids", "550, 13,,550").unwrap(), vec![550, 13]);
        assert!(parse_id_list("movie_ids", ",,").is_err());
        assert!(parse_id_list("movie_ids", "550,abc").is_err());
    }
}
