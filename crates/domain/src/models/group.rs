//! Device groups and their memberships.

use biq_shared::identity::{id_eq, id_hash};
use biq_shared::{DeviceUrn, Id, IdHashable, UserId};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

use super::device::BiqDevice;
use crate::codec::WireEntity;

/// A named collection of devices owned by one user.
///
/// Identity is `id` alone. `devices` is only filled in by the expanded read
/// path ([`BiqDeviceGroup::expanded`]).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BiqDeviceGroup {
    pub id: Id,
    pub owner_id: UserId,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    devices: Option<Vec<BiqDevice>>,
}

impl BiqDeviceGroup {
    pub fn new(id: Id, owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            name: name.into(),
            devices: None,
        }
    }

    /// Attaches the group's devices for an expanded read.
    pub fn expanded(mut self, devices: Vec<BiqDevice>) -> Self {
        self.devices = Some(devices);
        self
    }

    pub fn devices(&self) -> Option<&[BiqDevice]> {
        self.devices.as_deref()
    }
}

impl IdHashable for BiqDeviceGroup {
    type IdType = Id;

    fn id_key(&self) -> &Id {
        &self.id
    }
}

impl PartialEq for BiqDeviceGroup {
    fn eq(&self, other: &Self) -> bool {
        id_eq(self, other)
    }
}

impl Eq for BiqDeviceGroup {}

impl Hash for BiqDeviceGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        id_hash(self, state)
    }
}

impl WireEntity for BiqDeviceGroup {
    const ENTITY: &'static str = "BiqDeviceGroup";
}

/// A device's membership in a group. The pair itself is the fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiqDeviceGroupMembership {
    pub group_id: Id,
    pub device_id: DeviceUrn,
}

impl BiqDeviceGroupMembership {
    pub fn new(group_id: Id, device_id: impl Into<DeviceUrn>) -> Self {
        Self {
            group_id,
            device_id: device_id.into(),
        }
    }
}

impl WireEntity for BiqDeviceGroupMembership {
    const ENTITY: &'static str = "BiqDeviceGroupMembership";
}
