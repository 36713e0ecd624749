//! Entities and wire messages of the Biq schema.

pub mod device;
pub mod device_api;
pub mod flags;
mod finite;
pub mod group;
pub mod group_api;
pub mod limit;
pub mod observation;
pub mod permission;

pub use device::BiqDevice;
pub use flags::BiqDeviceFlag;
pub use group::{BiqDeviceGroup, BiqDeviceGroupMembership};
pub use limit::{BiqDeviceLimit, BiqDeviceLimitType};
pub use observation::{BiqObservation, ObservationElement};
pub use permission::BiqDeviceAccessPermission;
