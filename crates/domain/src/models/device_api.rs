//! Request and response payloads for device management.
//!
//! An absent optional field on an update means "leave unchanged".

use biq_shared::DeviceUrn;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::flags::BiqDeviceFlag;
use super::limit::{BiqDeviceLimit, BiqDeviceLimitType};
use super::observation::BiqObservation;
use super::BiqDevice;
use crate::codec::WireEntity;
use crate::error::UnknownCode;

/// A request that names a single device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenericDeviceRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
}

impl GenericDeviceRequest {
    pub fn new(device_id: impl Into<DeviceUrn>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }
}

/// Claim an unowned device.
pub type RegisterRequest = GenericDeviceRequest;

/// Fetch the caller's limits for a device.
pub type LimitsRequest = GenericDeviceRequest;

/// Request to share someone else's device.
///
/// Without a token the server applies its default sharing rules; with one
/// it redeems that specific share token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Uuid>,
}

impl ShareRequest {
    pub fn new(device_id: impl Into<DeviceUrn>, token: Option<Uuid>) -> Self {
        Self {
            device_id: device_id.into(),
            token,
        }
    }
}

/// Request for a token that lets others share a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShareTokenRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTokenResponse {
    pub token: Uuid,
}

impl ShareTokenResponse {
    /// Issues a fresh random token.
    pub fn generate() -> Self {
        Self {
            token: Uuid::new_v4(),
        }
    }
}

/// Request payload for updating a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl UpdateRequest {
    pub fn new(device_id: impl Into<DeviceUrn>) -> Self {
        Self {
            device_id: device_id.into(),
            name: None,
            flags: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_flags(mut self, flags: BiqDeviceFlag) -> Self {
        self.flags = Some(flags.raw());
        self
    }

    /// Decoded flags, `None` when the update leaves flags unchanged.
    pub fn device_flags(&self) -> Option<BiqDeviceFlag> {
        self.flags.map(BiqDeviceFlag::from_raw)
    }
}

/// A limit type and value, without the owning user and device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLimit {
    pub limit_type: BiqDeviceLimitType,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::finite::serialize_option"
    )]
    pub limit_value: Option<f32>,
}

impl DeviceLimit {
    pub fn new(limit_type: BiqDeviceLimitType, limit_value: Option<f32>) -> Self {
        Self {
            limit_type,
            limit_value,
        }
    }
}

impl TryFrom<&BiqDeviceLimit> for DeviceLimit {
    type Error = UnknownCode;

    fn try_from(limit: &BiqDeviceLimit) -> Result<Self, Self::Error> {
        Ok(Self {
            limit_type: BiqDeviceLimitType::try_from(limit.limit_type)?,
            limit_value: Some(limit.limit_value),
        })
    }
}

/// Set the limits on a device, or report the current ones.
///
/// The same shape travels in both directions; see [`DeviceLimitsResponse`].
/// Order of `limits` is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLimitsRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
    pub limits: Vec<DeviceLimit>,
}

impl UpdateLimitsRequest {
    pub fn new(device_id: impl Into<DeviceUrn>, limits: Vec<DeviceLimit>) -> Self {
        Self {
            device_id: device_id.into(),
            limits,
        }
    }
}

/// Current limits on a device.
pub type DeviceLimitsResponse = UpdateLimitsRequest;

/// One entry of a device listing.
///
/// Each expansion field may be left out independently by the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDevicesResponseItem {
    pub device: BiqDevice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_observation: Option<BiqObservation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<Vec<DeviceLimit>>,
}

impl ListDevicesResponseItem {
    pub fn new(device: BiqDevice) -> Self {
        Self {
            device,
            last_observation: None,
            share_count: None,
            limits: None,
        }
    }

    pub fn with_last_observation(mut self, observation: BiqObservation) -> Self {
        self.last_observation = Some(observation);
        self
    }

    pub fn with_share_count(mut self, share_count: i64) -> Self {
        self.share_count = Some(share_count);
        self
    }

    pub fn with_limits(mut self, limits: Vec<DeviceLimit>) -> Self {
        self.limits = Some(limits);
        self
    }
}

/// Time span selector for observation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ObsInterval {
    All = 0,
    /// Trailing 12 hours.
    Live = 1,
    Day = 2,
    Month = 3,
    Year = 4,
}

impl ObsInterval {
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Trailing window covered by the interval, `None` for everything.
    pub fn window(&self) -> Option<Duration> {
        match self {
            ObsInterval::All => None,
            ObsInterval::Live => Some(Duration::hours(12)),
            ObsInterval::Day => Some(Duration::days(1)),
            ObsInterval::Month => Some(Duration::days(30)),
            ObsInterval::Year => Some(Duration::days(365)),
        }
    }
}

impl TryFrom<i64> for ObsInterval {
    type Error = UnknownCode;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ObsInterval::All),
            1 => Ok(ObsInterval::Live),
            2 => Ok(ObsInterval::Day),
            3 => Ok(ObsInterval::Month),
            4 => Ok(ObsInterval::Year),
            _ => Err(UnknownCode::new("ObsInterval", raw)),
        }
    }
}

impl From<ObsInterval> for i64 {
    fn from(interval: ObsInterval) -> Self {
        interval.code()
    }
}

/// Request for a device's observations over an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ObsRequest {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
    pub interval: ObsInterval,
}

impl ObsRequest {
    pub fn new(device_id: impl Into<DeviceUrn>, interval: ObsInterval) -> Self {
        Self {
            device_id: device_id.into(),
            interval,
        }
    }
}

impl WireEntity for GenericDeviceRequest {
    const ENTITY: &'static str = "DeviceAPI.GenericDeviceRequest";
}

impl WireEntity for ShareRequest {
    const ENTITY: &'static str = "DeviceAPI.ShareRequest";
}

impl WireEntity for ShareTokenRequest {
    const ENTITY: &'static str = "DeviceAPI.ShareTokenRequest";
}

impl WireEntity for ShareTokenResponse {
    const ENTITY: &'static str = "DeviceAPI.ShareTokenResponse";
}

impl WireEntity for UpdateRequest {
    const ENTITY: &'static str = "DeviceAPI.UpdateRequest";
}

impl WireEntity for DeviceLimit {
    const ENTITY: &'static str = "DeviceAPI.DeviceLimit";
}

impl WireEntity for UpdateLimitsRequest {
    const ENTITY: &'static str = "DeviceAPI.UpdateLimitsRequest";
}

impl WireEntity for ListDevicesResponseItem {
    const ENTITY: &'static str = "DeviceAPI.ListDevicesResponseItem";
}

impl WireEntity for ObsRequest {
    const ENTITY: &'static str = "DeviceAPI.ObsRequest";
}
