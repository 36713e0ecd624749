//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a device URN.
pub const MAX_DEVICE_URN_LENGTH: usize = 128;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a device URN.
/// - Must not be empty or longer than 128 characters
/// - Must not contain whitespace or control characters
pub fn validate_device_urn(urn: &str) -> Result<(), ValidationError> {
    if urn.is_empty() || urn.chars().count() > MAX_DEVICE_URN_LENGTH {
        let mut err = ValidationError::new("device_urn_length");
        err.message = Some("Device URN must be between 1 and 128 characters".into());
        return Err(err);
    }

    if urn.chars().any(|c| c.is_whitespace() || c.is_control()) {
        let mut err = ValidationError::new("device_urn_format");
        err.message = Some("Device URN may not contain whitespace".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a charging indicator is 0 or 1.
pub fn validate_charging(charging: i64) -> Result<(), ValidationError> {
    if charging == 0 || charging == 1 {
        Ok(())
    } else {
        let mut err = ValidationError::new("charging_flag");
        err.message = Some("Charging must be 0 or 1".into());
        Err(err)
    }
}
