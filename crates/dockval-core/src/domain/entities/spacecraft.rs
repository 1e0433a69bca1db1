use serde::{Deserialize, Serialize};

use crate::domain::entities::common::text_field;
use crate::domain::error::DomainError;
use crate::domain::forms::{CAPTAIN_NAME, SPACECRAFT_NAME, SPACECRAFT_TYPE, validate_spacecraft};
use crate::domain::value_objects::FormData;

/// A spacecraft as registered with the station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacecraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub captain: String,
}

impl Spacecraft {
    /// Build a spacecraft from a submitted form.
    ///
    /// Runs [`validate_spacecraft`] first; any failure comes back as
    /// [`DomainError::InvalidForm`] carrying the full error map.
    pub fn from_form(data: &FormData) -> Result<Self, DomainError> {
        let errors = validate_spacecraft(data);
        if !errors.is_valid() {
            return Err(DomainError::InvalidForm(errors));
        }

        Ok(Self {
            name: text_field(data, SPACECRAFT_NAME)?,
            kind: text_field(data, SPACECRAFT_TYPE)?,
            captain: text_field(data, CAPTAIN_NAME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_form() {
        let form = FormData::new()
            .with("name", "Voyager")
            .with("type", "Explorer")
            .with("captain", "Janeway");

        let ship = Spacecraft::from_form(&form).unwrap();
        assert_eq!(ship.kind, "Explorer");
        assert_eq!(
            serde_json::to_value(&ship).unwrap(),
            serde_json::json!({ "name": "Voyager", "type": "Explorer", "captain": "Janeway" })
        );
    }

    #[test]
    fn invalid_form_carries_every_error() {
        let form = FormData::new().with("name", "Voy@ger");

        let Err(DomainError::InvalidForm(errors)) = Spacecraft::from_form(&form) else {
            panic!("expected InvalidForm");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Spacecraft name contains invalid characters"));
    }
}
