//! Device access grants.

use biq_shared::{DeviceUrn, UserId};
use serde::{Deserialize, Serialize};

use crate::codec::WireEntity;

/// Grants a user access to a device they may not own.
///
/// The meaning of `flags` belongs to the access-control service; it is
/// carried here as an opaque integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiqDeviceAccessPermission {
    pub user_id: UserId,
    pub device_id: DeviceUrn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
}

impl BiqDeviceAccessPermission {
    pub fn new(user_id: UserId, device_id: impl Into<DeviceUrn>, flags: i64) -> Self {
        Self {
            user_id,
            device_id: device_id.into(),
            flags: Some(flags),
        }
    }

    /// Permission bits, zero when absent.
    pub fn permission_flags(&self) -> i64 {
        self.flags.unwrap_or(0)
    }
}

impl WireEntity for BiqDeviceAccessPermission {
    const ENTITY: &'static str = "BiqDeviceAccessPermission";
}
