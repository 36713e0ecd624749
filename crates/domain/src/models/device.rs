//! Device domain model.

use biq_shared::identity::{id_eq, id_hash};
use biq_shared::{DeviceUrn, IdHashable, UserId};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use validator::Validate;

use super::flags::BiqDeviceFlag;
use super::group::BiqDeviceGroupMembership;
use super::permission::BiqDeviceAccessPermission;
use crate::codec::WireEntity;

/// Represents a registered device.
///
/// Identity is the device URN alone: two records with the same `id` compare
/// and hash equal whatever their other fields hold.
///
/// `group_memberships` and `access_permissions` are only ever filled in by
/// the expanded read path ([`BiqDevice::expanded`]). The create path
/// ([`BiqDevice::new`] and its `with_*` helpers) leaves them unset.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BiqDevice {
    #[validate(custom(function = "biq_shared::validation::validate_device_urn"))]
    pub id: DeviceUrn,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,

    /// Raw flag bits. Absent means no flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,

    #[validate(custom(function = "biq_shared::validation::validate_latitude"))]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::finite::serialize_option"
    )]
    pub latitude: Option<f64>,

    #[validate(custom(function = "biq_shared::validation::validate_longitude"))]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::models::finite::serialize_option"
    )]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_memberships: Option<Vec<BiqDeviceGroupMembership>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_permissions: Option<Vec<BiqDeviceAccessPermission>>,
}

impl BiqDevice {
    pub fn new(id: impl Into<DeviceUrn>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner_id: None,
            flags: None,
            latitude: None,
            longitude: None,
            group_memberships: None,
            access_permissions: None,
        }
    }

    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_flags(mut self, flags: BiqDeviceFlag) -> Self {
        self.flags = Some(flags.raw());
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Attaches joined group and permission rows for an expanded read.
    pub fn expanded(
        mut self,
        group_memberships: Vec<BiqDeviceGroupMembership>,
        access_permissions: Vec<BiqDeviceAccessPermission>,
    ) -> Self {
        self.group_memberships = Some(group_memberships);
        self.access_permissions = Some(access_permissions);
        self
    }

    /// Decoded flags; an absent value is the empty set.
    pub fn device_flags(&self) -> BiqDeviceFlag {
        BiqDeviceFlag::from_raw(self.flags.unwrap_or(0))
    }

    pub fn group_memberships(&self) -> Option<&[BiqDeviceGroupMembership]> {
        self.group_memberships.as_deref()
    }

    pub fn access_permissions(&self) -> Option<&[BiqDeviceAccessPermission]> {
        self.access_permissions.as_deref()
    }
}

impl IdHashable for BiqDevice {
    type IdType = DeviceUrn;

    fn id_key(&self) -> &DeviceUrn {
        &self.id
    }
}

impl PartialEq for BiqDevice {
    fn eq(&self, other: &Self) -> bool {
        id_eq(self, other)
    }
}

impl Eq for BiqDevice {}

impl Hash for BiqDevice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        id_hash(self, state)
    }
}

impl WireEntity for BiqDevice {
    const ENTITY: &'static str = "BiqDevice";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn hash_of(device: &BiqDevice) -> u64 {
        let mut hasher = DefaultHasher::new();
        device.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_leaves_expansion_fields_unset() {
        let device = BiqDevice::new("urn:biq:0001", "Kitchen")
            .with_owner(Uuid::new_v4())
            .with_flags(BiqDeviceFlag::LOCKED)
            .with_location(43.65, -79.38);
        assert!(device.group_memberships().is_none());
        assert!(device.access_permissions().is_none());
    }

    #[test]
    fn test_identity_ignores_other_fields() {
        let a = BiqDevice::new("urn:biq:0001", "Kitchen");
        let b = BiqDevice::new("urn:biq:0001", "Garage")
            .with_flags(BiqDeviceFlag::LIGHT_CAPABLE)
            .with_location(10.0, 20.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = BiqDevice::new("urn:biq:0002", "Kitchen");
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_treats_refetch_as_same_device() {
        let mut devices = HashSet::new();
        devices.insert(BiqDevice::new("urn:biq:0001", "Kitchen"));
        devices.insert(BiqDevice::new("urn:biq:0001", "Kitchen (renamed)"));
        devices.insert(BiqDevice::new("urn:biq:0002", "Kitchen"));
        assert_eq!(devices.len(), 2);
    }

    #[test]
    fn test_device_flags_default_empty() {
        let device = BiqDevice::new("urn:biq:0001", "Kitchen");
        assert!(device.flags.is_none());
        assert!(device.device_flags().is_empty());

        let device = device.with_flags(BiqDeviceFlag::LOCKED | BiqDeviceFlag::MOVEMENT_CAPABLE);
        assert_eq!(device.flags, Some(9));
        assert!(device.device_flags().contains(BiqDeviceFlag::MOVEMENT_CAPABLE));
    }

    #[test]
    fn test_decode_accepts_null_and_absent() {
        let absent: BiqDevice = decode(br#"{"id":"urn:biq:0001","name":"Kitchen"}"#).unwrap();
        let nulls: BiqDevice = decode(
            br#"{"id":"urn:biq:0001","name":"Kitchen","ownerId":null,"flags":null,
                "latitude":null,"longitude":null,"groupMemberships":null,"accessPermissions":null}"#,
        )
        .unwrap();
        for device in [absent, nulls] {
            assert!(device.owner_id.is_none());
            assert!(device.flags.is_none());
            assert!(device.latitude.is_none());
            assert!(device.longitude.is_none());
            assert!(device.group_memberships().is_none());
            assert!(device.access_permissions().is_none());
        }
    }

    #[test]
    fn test_decode_accepts_expansion_fields() {
        let group_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let payload = format!(
            r#"{{"id":"urn:biq:0001","name":"Kitchen",
                "groupMemberships":[{{"groupId":"{group_id}","deviceId":"urn:biq:0001"}}],
                "accessPermissions":[{{"userId":"{user_id}","deviceId":"urn:biq:0001","flags":2}}]}}"#
        );
        let device: BiqDevice = decode(payload.as_bytes()).unwrap();
        let memberships = device.group_memberships().unwrap();
        assert_eq!(memberships.len(), 1);
        assert_eq!(memberships[0].group_id, group_id);
        let permissions = device.access_permissions().unwrap();
        assert_eq!(permissions[0].user_id, user_id);
        assert_eq!(permissions[0].permission_flags(), 2);
    }

    #[test]
    fn test_unknown_flag_bits_round_trip() {
        let raw = (1u64 << 48) | 1;
        let payload = format!(r#"{{"id":"urn:biq:0001","name":"Kitchen","flags":{raw}}}"#);
        let device: BiqDevice = decode(payload.as_bytes()).unwrap();
        assert_eq!(device.device_flags().raw(), raw);

        let value: serde_json::Value = serde_json::from_slice(&encode(&device).unwrap()).unwrap();
        assert_eq!(value["flags"], serde_json::json!(raw));
    }

    #[test]
    fn test_round_trip_all_fields() {
        let device = BiqDevice::new("urn:biq:0001", "Kitchen")
            .with_owner(Uuid::new_v4())
            .with_flags(BiqDeviceFlag::TEMPERATURE_CAPABLE)
            .with_location(43.65, -79.38)
            .expanded(
                vec![BiqDeviceGroupMembership::new(Uuid::new_v4(), "urn:biq:0001")],
                vec![BiqDeviceAccessPermission::new(Uuid::new_v4(), "urn:biq:0001", 0)],
            );
        let encoded = encode(&device).unwrap();
        let decoded: BiqDevice = decode(&encoded).unwrap();
        assert_eq!(
            serde_json::to_value(&decoded).unwrap(),
            serde_json::to_value(&device).unwrap()
        );
        assert_eq!(decoded.owner_id, device.owner_id);
        assert_eq!(decoded.latitude, Some(43.65));
        assert_eq!(decoded.group_memberships(), device.group_memberships());
    }

    #[test]
    fn test_validation() {
        assert!(BiqDevice::new("urn:biq:0001", "Kitchen").validate().is_ok());
        assert!(BiqDevice::new("", "Kitchen").validate().is_err());
        assert!(BiqDevice::new("urn:biq:0001", "Kitchen")
            .with_location(91.0, 0.0)
            .validate()
            .is_err());
    }
}
