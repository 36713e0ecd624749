//! Per-user alert limits on a device.

use biq_shared::{DeviceUrn, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::WireEntity;
use crate::error::UnknownCode;

/// Kind of limit. The codes are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum BiqDeviceLimitType {
    TempHigh = 0,
    TempLow = 1,
    MovementLevel = 2,
    BatteryLevel = 3,
    Notifications = 4,
    TempScale = 5,
    Colour = 6,
}

impl BiqDeviceLimitType {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BiqDeviceLimitType::TempHigh => "tempHigh",
            BiqDeviceLimitType::TempLow => "tempLow",
            BiqDeviceLimitType::MovementLevel => "movementLevel",
            BiqDeviceLimitType::BatteryLevel => "batteryLevel",
            BiqDeviceLimitType::Notifications => "notifications",
            BiqDeviceLimitType::TempScale => "tempScale",
            BiqDeviceLimitType::Colour => "colour",
        }
    }
}

impl TryFrom<u8> for BiqDeviceLimitType {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(BiqDeviceLimitType::TempHigh),
            1 => Ok(BiqDeviceLimitType::TempLow),
            2 => Ok(BiqDeviceLimitType::MovementLevel),
            3 => Ok(BiqDeviceLimitType::BatteryLevel),
            4 => Ok(BiqDeviceLimitType::Notifications),
            5 => Ok(BiqDeviceLimitType::TempScale),
            6 => Ok(BiqDeviceLimitType::Colour),
            _ => Err(UnknownCode::new("BiqDeviceLimitType", code.into())),
        }
    }
}

impl TryFrom<i64> for BiqDeviceLimitType {
    type Error = UnknownCode;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u8::try_from(raw)
            .map_err(|_| UnknownCode::new("BiqDeviceLimitType", raw))
            .and_then(<Self as TryFrom<u8>>::try_from)
    }
}

impl From<BiqDeviceLimitType> for i64 {
    fn from(limit_type: BiqDeviceLimitType) -> Self {
        limit_type.code().into()
    }
}

impl fmt::Display for BiqDeviceLimitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A threshold one user has set on one device.
///
/// `limit_type` is kept as the raw byte so codes added by newer servers
/// survive a decode and re-encode. [`BiqDeviceLimit::kind`] decodes it and
/// yields `None` for codes this version does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiqDeviceLimit {
    pub user_id: UserId,
    pub device_id: DeviceUrn,
    pub limit_type: u8,
    #[serde(serialize_with = "crate::models::finite::serialize")]
    pub limit_value: f32,
    /// Used when the limit is not numeric, e.g. a colour name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_value_string: Option<String>,
}

impl BiqDeviceLimit {
    pub fn new(
        user_id: UserId,
        device_id: impl Into<DeviceUrn>,
        limit_type: BiqDeviceLimitType,
    ) -> Self {
        Self {
            user_id,
            device_id: device_id.into(),
            limit_type: limit_type.code(),
            limit_value: 0.0,
            limit_value_string: None,
        }
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.limit_value = value;
        self
    }

    pub fn with_value_string(mut self, value: impl Into<String>) -> Self {
        self.limit_value_string = Some(value.into());
        self
    }

    /// The decoded limit type, or `None` for an unrecognised code.
    pub fn kind(&self) -> Option<BiqDeviceLimitType> {
        BiqDeviceLimitType::try_from(self.limit_type).ok()
    }
}

impl WireEntity for BiqDeviceLimit {
    const ENTITY: &'static str = "BiqDeviceLimit";
}
