//! Versioned signature tables.
//!
//! A table is a compatibility contract against one specific game executable
//! build: each entry pairs an anchor byte pattern with the location of the
//! 32-bit displacement it encodes and the fields captured from it. A build
//! update that relocates these structures means updating this table, not the
//! accessors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scan::Pattern;

use super::PhysicsField;

/// One field resolved from an anchor match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCapture {
    pub field: PhysicsField,
    /// Added to the decoded displacement. Also how derived fields are
    /// expressed: fly-mode is transformation + 4 on the same anchor, so it
    /// resolves exactly when the anchor does.
    #[serde(default)]
    pub addend: i32,
}

/// An anchor pattern and the displacement it encodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub name: String,
    pub pattern: Pattern,
    /// Byte offset into a successful match where the little-endian i32
    /// displacement sits. May point past the end of the pattern itself: the
    /// operand can live in trailing bytes the pattern does not pin down.
    pub disp_offset: usize,
    pub captures: Vec<FieldCapture>,
}

/// Signature table for one game build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureSet {
    pub build: String,
    pub entries: Vec<SignatureEntry>,
}

impl SignatureSet {
    pub fn entry(&self, name: &str) -> Option<&SignatureEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// The embedded table for the supported game build.
    pub fn builtin() -> Self {
        use PhysicsField::*;

        Self {
            build: "b2699".to_string(),
            entries: vec![
                entry(
                    "driveControls",
                    "74 0A F3 0F 11 B3 ?? ?? ?? ?? EB 25",
                    6,
                    vec![
                        capture(Throttle, 0x10),
                        capture(Brake, 0x14),
                        capture(SteeringAngle, 0x8),
                    ],
                ),
                entry(
                    "handbrake",
                    "44 88 A3 ?? ?? ?? ?? 45 8A F4",
                    3,
                    vec![capture(Handbrake, 0)],
                ),
                entry(
                    "handlingData",
                    "3C 03 0F 85 ?? ?? ?? ?? 48 8B 41 20 48 8B 88",
                    0x16,
                    vec![capture(HandlingData, 0)],
                ),
                entry(
                    "wheels",
                    "3B B7 ?? ?? ?? ?? 7D 0D",
                    2,
                    vec![capture(WheelArray, -8), capture(WheelCount, 0)],
                ),
                entry(
                    "wheelSteering",
                    "0F 2F ?? ?? ?? 00 00 0F 97 C0 EB DA",
                    3,
                    vec![capture(WheelSteeringAngle, 0)],
                ),
                entry(
                    "fuelLevel",
                    "74 26 0F 57 C9",
                    8,
                    vec![capture(FuelLevel, 0)],
                ),
                entry(
                    "wheelSuspension",
                    "45 0F 57 ?? F3 0F 11 ?? ?? ?? 00 00 F3 0F 5C",
                    8,
                    vec![
                        capture(WheelSuspensionCompression, 0),
                        capture(WheelAngle, 0x8),
                        capture(WheelAngularVelocity, 0xC),
                    ],
                ),
                entry(
                    "hoverTransform",
                    "F3 0F 11 B3 ?? ?? ?? ?? 44 88 ?? ?? ?? ?? ?? 48 85 C9",
                    4,
                    vec![capture(Transformation, 0), capture(FlyMode, 4)],
                ),
            ],
        }
    }
}

fn entry(name: &str, pattern: &str, disp_offset: usize, captures: Vec<FieldCapture>) -> SignatureEntry {
    SignatureEntry {
        name: name.to_string(),
        pattern: Pattern::parse(pattern).expect("builtin pattern is well-formed"),
        disp_offset,
        captures,
    }
}

fn capture(field: PhysicsField, addend: i32) -> FieldCapture {
    FieldCapture { field, addend }
}

pub fn load_signatures<P: AsRef<Path>>(path: P) -> Result<SignatureSet> {
    let content = fs::read_to_string(&path)?;
    let set = serde_json::from_str(&content)?;
    Ok(set)
}

pub fn save_signatures<P: AsRef<Path>>(path: P, signatures: &SignatureSet) -> Result<()> {
    let content = serde_json::to_string_pretty(signatures)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_builtin_parses_and_covers_every_field() {
        let set = SignatureSet::builtin();
        for field in PhysicsField::iter() {
            assert!(
                set.entries
                    .iter()
                    .flat_map(|e| &e.captures)
                    .any(|c| c.field == field),
                "no builtin capture for {field}"
            );
        }
    }

    #[test]
    fn test_entry_lookup_is_case_insensitive() {
        let set = SignatureSet::builtin();
        assert!(set.entry("drivecontrols").is_some());
        assert!(set.entry("noSuchEntry").is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signatures.json");

        let set = SignatureSet::builtin();
        save_signatures(&path, &set).unwrap();
        let loaded = load_signatures(&path).unwrap();

        assert_eq!(loaded.build, set.build);
        assert_eq!(loaded.entries.len(), set.entries.len());
        let wheels = loaded.entry("wheels").unwrap();
        assert_eq!(wheels.pattern.to_string(), "3B B7 ?? ?? ?? ?? 7D 0D");
        assert_eq!(wheels.captures[0].addend, -8);
    }
}
