//! Serializers that refuse NaN and infinities.
//!
//! JSON has no spelling for non-finite numbers and `serde_json` writes them
//! as `null`, which the float fields then refuse to decode.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};

/// A float that can be checked before it reaches the wire.
pub(crate) trait WireFloat: Copy + Serialize {
    fn is_wire_safe(self) -> bool;
}

impl WireFloat for f32 {
    fn is_wire_safe(self) -> bool {
        self.is_finite()
    }
}

impl WireFloat for f64 {
    fn is_wire_safe(self) -> bool {
        self.is_finite()
    }
}

pub(crate) fn serialize<T: WireFloat, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    if !value.is_wire_safe() {
        return Err(S::Error::custom("non-finite number cannot be encoded"));
    }
    value.serialize(s)
}

pub(crate) fn serialize_option<T: WireFloat, S: Serializer>(
    value: &Option<T>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if !v.is_wire_safe() => {
            Err(S::Error::custom("non-finite number cannot be encoded"))
        }
        _ => value.serialize(s),
    }
}
