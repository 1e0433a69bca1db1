use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::common::{number_field, text_field};
use crate::domain::error::DomainError;
use crate::domain::forms::{BAY_ID, DOCKING_TIME, SPACECRAFT_ID, validate_docking_at};
use crate::domain::rules::parse_timestamp;
use crate::domain::value_objects::FormData;

/// Lifecycle of a docking slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockingStatus {
    #[default]
    Scheduled,
    Docked,
    Departing,
}

impl DockingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Docked => "docked",
            Self::Departing => "departing",
        }
    }
}

impl fmt::Display for DockingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "docked" => Ok(Self::Docked),
            "departing" => Ok(Self::Departing),
            other => Err(DomainError::UnknownDockingStatus(other.to_owned())),
        }
    }
}

/// A validated request to dock a spacecraft in a bay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockingRequest {
    pub spacecraft_id: String,
    pub docking_time: DateTime<Utc>,
    pub bay_id: u32,
    pub status: DockingStatus,
}

impl DockingRequest {
    /// Build a request from a submitted form, checked against the current time.
    pub fn from_form(data: &FormData) -> Result<Self, DomainError> {
        Self::from_form_at(data, Utc::now())
    }

    /// Build a request from a submitted form, checked against `now`.
    ///
    /// New requests always start out [`DockingStatus::Scheduled`].
    pub fn from_form_at(data: &FormData, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let errors = validate_docking_at(data, now);
        if !errors.is_valid() {
            return Err(DomainError::InvalidForm(errors));
        }

        let docking_time = parse_timestamp(&text_field(data, DOCKING_TIME)?)
            .ok_or(DomainError::MissingRequiredField { field: DOCKING_TIME.key })?;

        Ok(Self {
            spacecraft_id: text_field(data, SPACECRAFT_ID)?,
            docking_time,
            // Integer in [1, 1000] once validation has passed.
            bay_id: number_field(data, BAY_ID)? as u32,
            status: DockingStatus::Scheduled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2027, 7, 4, 0, 0, 0).unwrap()
    }

    #[test]
    fn builds_from_valid_form() {
        let form = FormData::new()
            .with("spacecraftId", "voyager1")
            .with("dockingTime", "2027-07-05T08:00:00.000Z")
            .with("bayId", 42);

        let request = DockingRequest::from_form_at(&form, now()).unwrap();
        assert_eq!(request.bay_id, 42);
        assert_eq!(request.status, DockingStatus::Scheduled);
        assert_eq!(
            request.docking_time,
            Utc.with_ymd_and_hms(2027, 7, 5, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn enterprise_in_bay_1701_is_rejected() {
        let form = FormData::new()
            .with("spacecraftId", "3n73rpr153")
            .with("dockingTime", "2027-07-05T08:00:00Z")
            .with("bayId", 1701);

        let Err(DomainError::InvalidForm(errors)) = DockingRequest::from_form_at(&form, now())
        else {
            panic!("expected InvalidForm");
        };
        assert_eq!(
            errors.get("bayId"),
            Some("Enterprise cannot dock in bay 1701 due to historical reasons")
        );
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            DockingStatus::Scheduled,
            DockingStatus::Docked,
            DockingStatus::Departing,
        ] {
            assert_eq!(status.to_string().parse::<DockingStatus>().unwrap(), status);
        }
        assert!("lost".parse::<DockingStatus>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let request = DockingRequest {
            spacecraft_id: "voyager1".into(),
            docking_time: Utc.with_ymd_and_hms(2027, 7, 5, 8, 0, 0).unwrap(),
            bay_id: 7,
            status: DockingStatus::Docked,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["spacecraftId"], "voyager1");
        assert_eq!(value["bayId"], 7);
        assert_eq!(value["status"], "docked");
    }
}
