//! The TLV value used throughout the proxy to represent a RADIUS attribute.

use crate::error::{CoreError, Result};

/// A single RADIUS attribute: a type byte, a length implied by the value,
/// and an optional value of at most 255 bytes.
///
/// A zero-length value and an absent value are the same state (`value` is
/// `None` in both cases) — this matches the invariant that `l == 0` implies
/// no value buffer is held at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    attr_type: u8,
    value: Option<Vec<u8>>,
}

impl Attribute {
    /// Build an attribute, copying `value` if non-empty.
    ///
    /// Returns [`CoreError::AttributeTooLong`] if `value` exceeds 255 bytes
    /// — the length field this type represents is a single byte, so unlike
    /// the original this never silently truncates or wraps.
    pub fn new(attr_type: u8, value: Option<&[u8]>) -> Result<Self> {
        let value = match value {
            None | Some([]) => None,
            Some(v) if v.len() > 255 => return Err(CoreError::AttributeTooLong(v.len())),
            Some(v) => Some(v.to_vec()),
        };
        Ok(Self { attr_type, value })
    }

    pub fn attr_type(&self) -> u8 {
        self.attr_type
    }

    /// Length of the value, as it would be encoded on the wire.
    pub fn len(&self) -> u8 {
        self.value.as_ref().map_or(0, |v| v.len() as u8)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Reallocate the value buffer to `new_len` bytes, zero-extending or
    /// truncating as needed. Leaves `self` untouched on failure.
    pub fn resize(&mut self, new_len: u8) -> Result<()> {
        if new_len == 0 {
            self.value = None;
            return Ok(());
        }
        let mut buf = self.value.clone().unwrap_or_default();
        buf.resize(new_len as usize, 0);
        self.value = Some(buf);
        Ok(())
    }

    /// Interpret the value as display text.
    ///
    /// Returns `None` for an absent value rather than conflating "no value"
    /// with an empty string or a null-terminator sentinel.
    pub fn to_display(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    /// Interpret the first 4 bytes of the value as a big-endian u32.
    /// `None` unless the value holds at least 4 bytes.
    pub fn to_u32(&self) -> Option<u32> {
        let v = self.value.as_ref()?;
        if v.len() < 4 {
            return None;
        }
        Some(u32::from_be_bytes([v[0], v[1], v[2], v[3]]))
    }

    /// Format the first 4 bytes of the value as dotted-decimal IPv4.
    /// `None` unless the value holds at least 4 bytes.
    pub fn to_ipv4(&self) -> Option<String> {
        let v = self.value.as_ref()?;
        if v.len() < 4 {
            return None;
        }
        Some(format!("{}.{}.{}.{}", v[0], v[1], v[2], v[3]))
    }
}

/// Operations on an ordered sequence of attributes. Implemented as an
/// extension trait over `Vec<Attribute>` rather than a bespoke list type —
/// duplicate `attr_type` values and insertion order are both plain `Vec`
/// semantics already.
pub trait AttributeListExt {
    /// Remove every attribute whose type matches `attr_type`, preserving the
    /// relative order of the remaining attributes.
    fn remove_by_type(&mut self, attr_type: u8);

    /// All attributes with a matching type, in order.
    fn by_type(&self, attr_type: u8) -> Vec<&Attribute>;
}

impl AttributeListExt for Vec<Attribute> {
    fn remove_by_type(&mut self, attr_type: u8) {
        self.retain(|a| a.attr_type != attr_type);
    }

    fn by_type(&self, attr_type: u8) -> Vec<&Attribute> {
        self.iter().filter(|a| a.attr_type == attr_type).collect()
    }
}

