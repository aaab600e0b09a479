//! Input validation for volunteer applications.
//!
//! The whole contract is presence: each required field must exist and
//! contain something other than whitespace. Length, character set, and
//! cross-field rules are not checked.

use crate::domain::ValidationError;
use crate::models::VolunteerRegistration;

/// Check that an application has every required field filled in.
///
/// Fields are checked in form order (name, address, experience,
/// capability); the first blank one is reported by its parameter name.
pub fn validate_application(application: &VolunteerRegistration) -> Result<(), ValidationError> {
    let required = [
        ("user_name", &application.user_name),
        ("address", &application.address),
        ("experience", &application.experience),
        ("capability", &application.capability),
    ];

    for (field, value) in required {
        if is_blank(value.as_deref()) {
            return Err(ValidationError::MissingField(field));
        }
    }

    Ok(())
}

/// Boolean form of [`validate_application`].
pub fn is_valid_application(application: &VolunteerRegistration) -> bool {
    validate_application(application).is_ok()
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
