use crate::utils::error::{MinPopVoteError, Result};

pub const FIRST_ELECTION_YEAR: u32 = 1828;
pub const LAST_ELECTION_YEAR: u32 = 2020;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MinPopVoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MinPopVoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
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
        return Err(MinPopVoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Presidential elections only: every fourth year from 1828 through 2020.
pub fn validate_election_year(field_name: &str, year: u32) -> Result<()> {
    validate_range(field_name, year, FIRST_ELECTION_YEAR, LAST_ELECTION_YEAR)?;
    if year % 4 != 0 {
        return Err(MinPopVoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: year.to_string(),
            reason: "Not a presidential election year (must be divisible by 4)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| MinPopVoteError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_election_year() {
        assert!(validate_election_year("year", 1828).is_ok());
        assert!(validate_election_year("year", 2000).is_ok());
        assert!(validate_election_year("year", 2020).is_ok());
        assert!(validate_election_year("year", 1824).is_err());
        assert!(validate_election_year("year", 2024).is_err());
        assert!(validate_election_year("year", 2001).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let year: Option<u32> = Some(1960);
        assert_eq!(*validate_required_field("year", &year).unwrap(), 1960);

        let missing: Option<u32> = None;
        let err = validate_required_field("year", &missing).unwrap_err();
        assert!(matches!(err, MinPopVoteError::MissingConfigError { .. }));
    }
}
