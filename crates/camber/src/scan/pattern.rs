use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Mask-qualified byte pattern. `None` positions match any byte.
///
/// Patterns come in two textual forms: the spaced hex form used in signature
/// tables (`"74 0A F3 0F 11 B3 ?? ?? ?? ?? EB 25"`) and the byte-string plus
/// mask form game-build tables are traditionally written in, where `x` marks
/// an exact byte and any other mask character a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<Option<u8>>,
}

impl Pattern {
    /// Parse the spaced hex form, `??` (or `?`) marking wildcards.
    pub fn parse(text: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        for token in text.split_whitespace() {
            if token == "??" || token == "?" {
                bytes.push(None);
                continue;
            }

            let value = u8::from_str_radix(token, 16)
                .map_err(|_| Error::InvalidPattern(token.to_string()))?;
            bytes.push(Some(value));
        }

        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }

        Ok(Self { bytes })
    }

    /// Build from a raw byte string and a parallel mask string.
    pub fn from_bytes_mask(bytes: &[u8], mask: &str) -> Result<Self> {
        if bytes.len() != mask.len() {
            return Err(Error::MaskLengthMismatch {
                pattern: bytes.len(),
                mask: mask.len(),
            });
        }
        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let bytes = bytes
            .iter()
            .zip(mask.chars())
            .map(|(&b, m)| if m == 'x' { Some(b) } else { None })
            .collect();

        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: construction rejects empty patterns.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn bytes(&self) -> &[Option<u8>] {
        &self.bytes
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .bytes
            .iter()
            .map(|b| match b {
                Some(value) => format!("{:02X}", value),
                None => "??".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Pattern::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_wildcards() {
        let pattern = Pattern::parse("48 8D 0D ?? ?? ?? ??").unwrap();
        assert_eq!(pattern.len(), 7);
        assert_eq!(pattern.bytes()[0], Some(0x48));
        assert_eq!(pattern.bytes()[1], Some(0x8D));
        assert_eq!(pattern.bytes()[2], Some(0x0D));
        assert_eq!(pattern.bytes()[3], None);
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        assert!(matches!(
            Pattern::parse("48 ZZ"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(Pattern::parse("   "), Err(Error::EmptyPattern)));
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "74 0A F3 0F 11 B3 ?? ?? ?? ?? EB 25";
        let pattern = Pattern::parse(text).unwrap();
        assert_eq!(pattern.to_string(), text);
        assert_eq!(Pattern::parse(&pattern.to_string()).unwrap(), pattern);
    }

    #[test]
    fn test_from_bytes_mask() {
        let pattern = Pattern::from_bytes_mask(b"\x44\x88\xA3\x00\x00\x00\x00\x45", "xxx????x").unwrap();
        assert_eq!(pattern.to_string(), "44 88 A3 ?? ?? ?? ?? 45");
    }

    #[test]
    fn test_from_bytes_mask_length_mismatch() {
        assert!(matches!(
            Pattern::from_bytes_mask(b"\x44\x88", "xxx"),
            Err(Error::MaskLengthMismatch { pattern: 2, mask: 3 })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let pattern = Pattern::parse("3B B7 ?? ?? ?? ?? 7D 0D").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"3B B7 ?? ?? ?? ?? 7D 0D\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }
}
