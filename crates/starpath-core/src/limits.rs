//! Input validation for star records

/// Maximum length for star names (256 bytes)
pub const MAX_STAR_NAME_LEN: usize = 256;

/// Minimum number of stars `create_paths` can connect
pub const MIN_STARS_FOR_PATHS: usize = 3;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyStarName,
    StarNameTooLong { len: usize, max: usize },
    NonPositiveDistance { name: String, value: f64 },
    NonPositiveMass { name: String, value: f64 },
    NonFiniteRadius { name: String, value: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStarName => write!(f, "Star name cannot be empty"),
            Self::StarNameTooLong { len, max } => {
                write!(f, "Star name too long: {} bytes (max {})", len, max)
            }
            Self::NonPositiveDistance { name, value } => {
                write!(f, "Distance of '{}' must be a positive number, got {}", name, value)
            }
            Self::NonPositiveMass { name, value } => {
                write!(f, "Mass of '{}' must be a positive number, got {}", name, value)
            }
            Self::NonFiniteRadius { name, value } => {
                write!(f, "Radius of '{}' must be finite, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate star name
pub fn validate_star_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyStarName);
    }
    if name.len() > MAX_STAR_NAME_LEN {
        return Err(ValidationError::StarNameTooLong {
            len: name.len(),
            max: MAX_STAR_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate the numeric attributes of a star
///
/// NaN fails every comparison, so `!(x > 0.0)` rejects it along with
/// zero and negative values.
pub fn validate_star_attributes(
    name: &str,
    distance: f64,
    mass: f64,
    radius: f64,
) -> Result<(), ValidationError> {
    if !(distance > 0.0 && distance.is_finite()) {
        return Err(ValidationError::NonPositiveDistance {
            name: name.to_string(),
            value: distance,
        });
    }
    if !(mass > 0.0 && mass.is_finite()) {
        return Err(ValidationError::NonPositiveMass {
            name: name.to_string(),
            value: mass,
        });
    }
    if !radius.is_finite() {
        return Err(ValidationError::NonFiniteRadius {
            name: name.to_string(),
            value: radius,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_star_name() {
        assert!(validate_star_name("Sirius").is_ok());
        assert_eq!(validate_star_name(""), Err(ValidationError::EmptyStarName));
        assert!(matches!(
            validate_star_name(&"x".repeat(300)),
            Err(ValidationError::StarNameTooLong { len: 300, .. })
        ));
    }

    #[test]
    fn test_validate_star_attributes() {
        assert!(validate_star_attributes("Vega", 25.0, 2.1, 2.36).is_ok());
        // Radius only orders the traversal, so zero and negatives are fine
        assert!(validate_star_attributes("Vega", 25.0, 2.1, -1.0).is_ok());

        assert!(matches!(
            validate_star_attributes("Vega", 0.0, 2.1, 2.36),
            Err(ValidationError::NonPositiveDistance { .. })
        ));
        assert!(matches!(
            validate_star_attributes("Vega", f64::NAN, 2.1, 2.36),
            Err(ValidationError::NonPositiveDistance { .. })
        ));
        assert!(matches!(
            validate_star_attributes("Vega", 25.0, -3.0, 2.36),
            Err(ValidationError::NonPositiveMass { .. })
        ));
        assert!(matches!(
            validate_star_attributes("Vega", 25.0, 2.1, f64::INFINITY),
            Err(ValidationError::NonFiniteRadius { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_star() {
        let err = validate_star_attributes("Rigel", -5.0, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("Rigel"));
    }
}
