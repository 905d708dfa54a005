//! Offset dumps for diagnostics.
//!
//! A dump captures what resolution produced for one game build so it can be
//! diffed against other builds or attached to a support report.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::Result;

use super::{FieldOffset, PhysicsField, PhysicsOffsets};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetDump {
    /// Game build label the table was resolved against.
    pub build: String,
    pub created_at: DateTime<Utc>,
    /// Field name to signed hex offset, or `"(unresolved)"`.
    pub fields: BTreeMap<String, String>,
}

impl OffsetDump {
    pub fn from_offsets(build: &str, offsets: &PhysicsOffsets) -> Self {
        let fields = PhysicsField::iter()
            .map(|field| {
                let value = match offsets.get(field) {
                    Some(offset) => format_offset(offset),
                    None => "(unresolved)".to_string(),
                };
                (field.to_string(), value)
            })
            .collect();

        Self {
            build: build.to_string(),
            created_at: Utc::now(),
            fields,
        }
    }

    pub fn is_for_build(&self, build: &str) -> bool {
        self.build == build
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let dump = serde_json::from_str(&content)?;
        Ok(dump)
    }
}

pub fn format_offset(offset: FieldOffset) -> String {
    let value = offset.get();
    if value < 0 {
        format!("-0x{:X}", -(value as i64))
    } else {
        format!("0x{:X}", value)
    }
}
