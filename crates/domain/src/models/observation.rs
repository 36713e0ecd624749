//! Telemetry samples reported by devices.

use biq_shared::DeviceUrn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::WireEntity;
use crate::error::UnknownCode;

/// A single telemetry sample, as written by the ingestion pipeline.
///
/// `obstime` is stored in milliseconds since the epoch. Use
/// [`BiqObservation::obs_time_seconds`] for a seconds view rather than
/// reinterpreting the raw field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BiqObservation {
    pub id: i64,
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub bixid: DeviceUrn,
    #[serde(serialize_with = "crate::models::finite::serialize")]
    pub obstime: f64,
    #[validate(custom(function = "biq_shared::validation::validate_charging"))]
    pub charging: i64,
    pub firmware: String,
    #[serde(serialize_with = "crate::models::finite::serialize")]
    pub battery: f64,
    #[serde(serialize_with = "crate::models::finite::serialize")]
    pub temp: f64,
    pub light: i64,
    pub humidity: i64,
    pub accelx: i64,
    pub accely: i64,
    pub accelz: i64,
}

impl BiqObservation {
    /// The reporting device.
    pub fn device_id(&self) -> &str {
        &self.bixid
    }

    pub fn obs_time_seconds(&self) -> f64 {
        self.obstime / 1000.0
    }

    /// Sample time, or `None` when the stored value is outside chrono's range.
    pub fn obs_time(&self) -> Option<DateTime<Utc>> {
        if !self.obstime.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(self.obstime.floor() as i64)
    }

    pub fn is_charging(&self) -> bool {
        self.charging != 0
    }
}

impl WireEntity for BiqObservation {
    const ENTITY: &'static str = "BiqObservation";
}

/// Logical channels of an observation, addressed by position.
///
/// `RelativeTemperature` and `Acceleration` are derived channels with no
/// single backing field on [`BiqObservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ObservationElement {
    DeviceId,
    FirmwareVersion,
    BatteryLevel,
    Charging,
    Temperature,
    LightLevel,
    RelativeHumidity,
    RelativeTemperature,
    /// Combined x/y/z.
    Acceleration,
}

impl ObservationElement {
    /// Every element in ordinal order.
    pub const ALL: [ObservationElement; 9] = [
        ObservationElement::DeviceId,
        ObservationElement::FirmwareVersion,
        ObservationElement::BatteryLevel,
        ObservationElement::Charging,
        ObservationElement::Temperature,
        ObservationElement::LightLevel,
        ObservationElement::RelativeHumidity,
        ObservationElement::RelativeTemperature,
        ObservationElement::Acceleration,
    ];

    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<i64> for ObservationElement {
    type Error = UnknownCode;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(UnknownCode::new("ObservationElement", raw))
    }
}

impl From<ObservationElement> for i64 {
    fn from(element: ObservationElement) -> Self {
        element.code()
    }
}
