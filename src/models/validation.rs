use super::{Item, ValidationError, ValidationResult};

/// Trait for validating input models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MAX_RESTAURANT_NAME_LENGTH: usize = 200;
pub const MAX_LOCATION_LENGTH: usize = 200;
pub const MAX_ITEM_NAME_LENGTH: usize = 200;

impl Validate for Item {
    fn validate(&self) -> ValidationResult<()> {
        validate_item_name(self.name())
    }
}

/// Validate restaurant name
pub fn validate_restaurant_name(name: &str) -> ValidationResult<()> {
    validate_text_field("restaurant_name", name, MAX_RESTAURANT_NAME_LENGTH)
}

/// Validate restaurant location
pub fn validate_location(location: &str) -> ValidationResult<()> {
    validate_text_field("location", location, MAX_LOCATION_LENGTH)
}

/// Validate menu item name
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_text_field("item_name", name, MAX_ITEM_NAME_LENGTH)
}

fn validate_text_field(field: &str, value: &str, max_length: usize) -> ValidationResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    if trimmed.len() > max_length {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max_length,
            actual_length: trimmed.len(),
        });
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Contains invalid control characters".to_string(),
        });
    }

    Ok(())
}
