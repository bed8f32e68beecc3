//! Object flag bitfield carried by locally defined objects

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Raw object flags as stored in the export map
    ///
    /// Bits without a named constant are retained as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const PUBLIC = 0x0000_0001;
        const STANDALONE = 0x0000_0002;
        const MARK_AS_NATIVE = 0x0000_0004;
        const TRANSACTIONAL = 0x0000_0008;
        const CLASS_DEFAULT_OBJECT = 0x0000_0010;
        const ARCHETYPE_OBJECT = 0x0000_0020;
        const TRANSIENT = 0x0000_0040;
        const DEFAULT_SUB_OBJECT = 0x0004_0000;
        const WAS_LOADED = 0x0008_0000;
        const LOAD_COMPLETED = 0x0020_0000;
        const INHERITABLE_COMPONENT_TEMPLATE = 0x0040_0000;

        const _ = !0;
    }
}

impl ObjectFlags {
    pub const NONE: Self = Self::empty();

    const DISPLAY_NAMES: [(Self, &'static str); 11] = [
        (Self::PUBLIC, "Public"),
        (Self::STANDALONE, "Standalone"),
        (Self::MARK_AS_NATIVE, "MarkAsNative"),
        (Self::TRANSACTIONAL, "Transactional"),
        (Self::CLASS_DEFAULT_OBJECT, "ClassDefaultObject"),
        (Self::ARCHETYPE_OBJECT, "ArchetypeObject"),
        (Self::TRANSIENT, "Transient"),
        (Self::DEFAULT_SUB_OBJECT, "DefaultSubObject"),
        (Self::WAS_LOADED, "WasLoaded"),
        (Self::LOAD_COMPLETED, "LoadCompleted"),
        (Self::INHERITABLE_COMPONENT_TEMPLATE, "InheritableComponentTemplate"),
    ];

    /// Names of the well-known flags that are set, in bit order
    pub fn names(self) -> Vec<&'static str> {
        Self::DISPLAY_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// The flags as the engine's signed 32-bit field
    #[allow(clippy::cast_possible_wrap)]
    pub const fn signed(self) -> i32 {
        self.bits() as i32
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<u32> for ObjectFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<i32> for ObjectFlags {
    #[allow(clippy::cast_sign_loss)]
    fn from(bits: i32) -> Self {
        Self::from_bits_retain(bits as u32)
    }
}

impl fmt::Display for ObjectFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.bits())
    }
}

/// Serialized as a signed 32-bit integer; unsigned input up to `u32::MAX` is accepted
impl Serialize for ObjectFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.signed())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagsRepr {
    Signed(i32),
    Unsigned(u32),
}

impl<'de> Deserialize<'de> for ObjectFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FlagsRepr::deserialize(deserializer)? {
            FlagsRepr::Signed(bits) => Self::from(bits),
            FlagsRepr::Unsigned(bits) => Self::from(bits),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_union() {
        let flags = ObjectFlags::PUBLIC.union(ObjectFlags::STANDALONE);
        assert!(flags.contains(ObjectFlags::PUBLIC));
        assert!(flags.contains(ObjectFlags::STANDALONE));
        assert!(!flags.contains(ObjectFlags::TRANSIENT));
        assert_eq!(flags.bits(), 3);
    }

    #[test]
    fn test_unknown_bits_are_retained() {
        let flags = ObjectFlags::from_bits_retain(0x8000_0011);
        assert_eq!(flags.bits(), 0x8000_0011);
        assert_eq!(flags.names(), vec!["Public", "ClassDefaultObject"]);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(ObjectFlags::from(0x28_u32).to_string(), "0x00000028");
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&ObjectFlags::ARCHETYPE_OBJECT).unwrap();
        assert_eq!(json, "32");
    }

    #[test]
    fn test_high_bit_serializes_signed() {
        let flags = ObjectFlags::from_bits_retain(0x8000_0000);
        assert_eq!(serde_json::to_string(&flags).unwrap(), "-2147483648");
    }

    #[test]
    fn test_deserializes_signed_and_unsigned() {
        let signed: ObjectFlags = serde_json::from_str("-2147483648").unwrap();
        let unsigned: ObjectFlags = serde_yaml::from_str("0x80000000").unwrap();
        assert_eq!(signed, unsigned);
        assert_eq!(signed.bits(), 0x8000_0000);
    }
}
