//! Device capability flags.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Capabilities and state bits of a device.
    ///
    /// Bit 1 is reserved. Bits this version does not name are retained, so a
    /// value decoded from a newer producer re-encodes unchanged.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct BiqDeviceFlag: u64 {
        const LOCKED = 1;
        const TEMPERATURE_CAPABLE = 1 << 2;
        const MOVEMENT_CAPABLE = 1 << 3;
        const LIGHT_CAPABLE = 1 << 4;
    }
}

impl BiqDeviceFlag {
    /// Wraps a raw integer without dropping unknown bits.
    pub fn from_raw(raw: u64) -> Self {
        Self::from_bits_retain(raw)
    }

    pub fn raw(&self) -> u64 {
        self.bits()
    }
}

impl From<u64> for BiqDeviceFlag {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<BiqDeviceFlag> for u64 {
    fn from(flags: BiqDeviceFlag) -> Self {
        flags.bits()
    }
}

impl Serialize for BiqDeviceFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

impl<'de> Deserialize<'de> for BiqDeviceFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
