//! Request payloads for group management.
//!
//! An absent optional field on an update means "leave unchanged".

use biq_shared::{DeviceUrn, Id};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::codec::WireEntity;

/// Request payload for creating a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub group_id: Id,
}

/// Request payload for updating a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub group_id: Id,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UpdateRequest {
    pub fn new(group_id: Id) -> Self {
        Self {
            group_id,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDevicesRequest {
    pub group_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceRequest {
    pub group_id: Id,
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub device_id: DeviceUrn,
}

impl AddDeviceRequest {
    pub fn new(group_id: Id, device_id: impl Into<DeviceUrn>) -> Self {
        Self {
            group_id,
            device_id: device_id.into(),
        }
    }
}

impl WireEntity for CreateRequest {
    const ENTITY: &'static str = "GroupAPI.CreateRequest";
}

impl WireEntity for DeleteRequest {
    const ENTITY: &'static str = "GroupAPI.DeleteRequest";
}

impl WireEntity for UpdateRequest {
    const ENTITY: &'static str = "GroupAPI.UpdateRequest";
}

impl WireEntity for ListDevicesRequest {
    const ENTITY: &'static str = "GroupAPI.ListDevicesRequest";
}

impl WireEntity for AddDeviceRequest {
    const ENTITY: &'static str = "GroupAPI.AddDeviceRequest";
}
