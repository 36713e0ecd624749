//! Identity types shared by every Biq entity.
//!
//! Accounts and groups are keyed by UUIDs. Devices are keyed by the URN
//! burned into the hardware, used directly rather than through a surrogate.

use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Primary key for an account owner.
pub type UserId = Uuid;

/// Primary key for device groups and other server-generated rows.
pub type Id = Uuid;

/// Unique resource name of a physical device.
pub type DeviceUrn = String;

/// An entity whose identity is its primary key alone.
///
/// Two values with the same key are the same entity, whatever their other
/// fields hold. Implementors route `PartialEq` and `Hash` through
/// [`id_eq`] and [`id_hash`] so sets treat a fresh fetch and an edited copy
/// as interchangeable.
pub trait IdHashable {
    type IdType: Hash + Eq;

    fn id_key(&self) -> &Self::IdType;
}

/// Id-only equality for an [`IdHashable`] type.
pub fn id_eq<T: IdHashable>(lhs: &T, rhs: &T) -> bool {
    lhs.id_key() == rhs.id_key()
}

/// Id-only hashing for an [`IdHashable`] type.
pub fn id_hash<T: IdHashable, H: Hasher>(value: &T, state: &mut H) {
    value.id_key().hash(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use std::collections::HashSet;

    #[derive(Debug)]
    struct Sensor {
        urn: DeviceUrn,
        label: String,
    }

    impl IdHashable for Sensor {
        type IdType = DeviceUrn;

        fn id_key(&self) -> &DeviceUrn {
            &self.urn
        }
    }

    impl PartialEq for Sensor {
        fn eq(&self, other: &Self) -> bool {
            id_eq(self, other)
        }
    }

    impl Eq for Sensor {}

    impl Hash for Sensor {
        fn hash<H: Hasher>(&self, state: &mut H) {
            id_hash(self, state)
        }
    }

    #[test]
    fn test_same_id_different_fields_are_equal() {
        let a = Sensor {
            urn: "urn:biq:0001".to_string(),
            label: "kitchen".to_string(),
        };
        let b = Sensor {
            urn: "urn:biq:0001".to_string(),
            label: "garage".to_string(),
        };
        assert_ne!(a.label, b.label);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_id_same_fields_are_not_equal() {
        let a = Sensor {
            urn: "urn:biq:0001".to_string(),
            label: "kitchen".to_string(),
        };
        let b = Sensor {
            urn: "urn:biq:0002".to_string(),
            label: "kitchen".to_string(),
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_set_collapses_same_id() {
        let mut set = HashSet::new();
        set.insert(Sensor {
            urn: "urn:biq:0001".to_string(),
            label: "old".to_string(),
        });
        let replaced = set.replace(Sensor {
            urn: "urn:biq:0001".to_string(),
            label: "new".to_string(),
        });
        assert!(replaced.is_some());
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().label, "new");
    }

    #[test]
    fn test_uuid_keys_hash_identically() {
        struct Keyed(Id);
        impl IdHashable for Keyed {
            type IdType = Id;
            fn id_key(&self) -> &Id {
                &self.0
            }
        }

        let id: Uuid = Faker.fake();
        let hash = |value: &Keyed| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            id_hash(value, &mut hasher);
            hasher.finish()
        };
        assert!(id_eq(&Keyed(id), &Keyed(id)));
        assert_eq!(hash(&Keyed(id)), hash(&Keyed(id)));
    }
}
