//! One-shot offset resolution.
//!
//! Resolution happens exactly once per process lifetime: there is no re-scan
//! or hot-reload path, because the table describes a single loaded binary.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::memory::ModuleImage;
use crate::scan;

use super::{FieldOffset, PhysicsField, PhysicsOffsets, SignatureSet};

/// Resolve every signature entry against `image`.
///
/// A missing pattern is not an error: the affected fields stay unresolved
/// and their accessors degrade to documented defaults. The whole resolution
/// therefore never fails, it only resolves fewer fields.
pub fn resolve(image: &ModuleImage<'_>, signatures: &SignatureSet) -> PhysicsOffsets {
    let data = image.bytes();
    let mut offsets = PhysicsOffsets::default();

    for entry in &signatures.entries {
        let Some(pos) = scan::find_pattern(data, &entry.pattern) else {
            warn!(
                "signature '{}' not found; its fields are unsupported on this build",
                entry.name
            );
            continue;
        };

        let Some(disp) = read_disp(data, pos, entry.disp_offset) else {
            warn!(
                "signature '{}' matched at {:#x} but its displacement lies outside the image",
                entry.name, pos
            );
            continue;
        };

        for capture in &entry.captures {
            let value = disp.wrapping_add(capture.addend);
            match FieldOffset::new(value) {
                Some(offset) => {
                    debug!(
                        "{}: {:#x} (anchor '{}' at {:#x})",
                        capture.field, value, entry.name, pos
                    );
                    offsets.set(capture.field, offset);
                }
                None => warn!(
                    "{}: displacement resolved to zero, treating as unsupported",
                    capture.field
                ),
            }
        }
    }

    // Fly-mode is derived from transformation and only meaningful when the
    // transformation offset itself resolved.
    if offsets.get(PhysicsField::Transformation).is_none()
        && offsets.get(PhysicsField::FlyMode).is_some()
    {
        warn!("flyMode: transformation unresolved, treating as unsupported");
        offsets.clear(PhysicsField::FlyMode);
    }

    offsets
}

fn read_disp(data: &[u8], pos: usize, disp_offset: usize) -> Option<i32> {
    let at = pos.checked_add(disp_offset)?;
    let bytes = data.get(at..at.checked_add(4)?)?;
    Some(i32::from_le_bytes(bytes.try_into().ok()?))
}

static GLOBAL: OnceLock<PhysicsOffsets> = OnceLock::new();

/// Install a pre-resolved table as the process-wide one.
///
/// Fails once any table is in place, whether installed here or resolved by
/// [`global`]; the table is never replaced for the lifetime of the process.
pub fn install(offsets: PhysicsOffsets) -> Result<()> {
    GLOBAL.set(offsets).map_err(|_| Error::AlreadyInstalled)
}

/// The process-wide offset table, resolved on first access.
///
/// On Windows the first call scans the host executable image with the
/// builtin signature set. Elsewhere, or when the image cannot be read, the
/// table stays empty and every accessor degrades to its documented default.
pub fn global() -> &'static PhysicsOffsets {
    GLOBAL.get_or_init(resolve_in_process)
}

#[cfg(target_os = "windows")]
fn resolve_in_process() -> PhysicsOffsets {
    match crate::memory::host_module() {
        Ok(image) => {
            let offsets = resolve(&image, &SignatureSet::builtin());
            debug!(
                "resolved {} fields from host image ({} bytes)",
                offsets.resolved_count(),
                image.len()
            );
            offsets
        }
        Err(e) => {
            warn!("host module image unavailable ({e}); all fields unsupported");
            PhysicsOffsets::default()
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn resolve_in_process() -> PhysicsOffsets {
    warn!("in-process resolution requires Windows; all fields unsupported");
    PhysicsOffsets::default()
}

#[cfg(test)]
mod tests {
    use crate::offset::PhysicsField;

    use super::*;

    /// Image with the driveControls and hoverTransform anchors embedded.
    fn test_image(drive_disp: i32, hover_disp: i32) -> Vec<u8> {
        let mut data = vec![0x90u8; 0x400];

        // 74 0A F3 0F 11 B3 <disp:i32> EB 25
        let at = 0x40;
        data[at..at + 6].copy_from_slice(&[0x74, 0x0A, 0xF3, 0x0F, 0x11, 0xB3]);
        data[at + 6..at + 10].copy_from_slice(&drive_disp.to_le_bytes());
        data[at + 10..at + 12].copy_from_slice(&[0xEB, 0x25]);

        // F3 0F 11 B3 <disp:i32> 44 88 xx xx xx xx xx 48 85 C9
        let at = 0x120;
        data[at..at + 4].copy_from_slice(&[0xF3, 0x0F, 0x11, 0xB3]);
        data[at + 4..at + 8].copy_from_slice(&hover_disp.to_le_bytes());
        data[at + 8..at + 10].copy_from_slice(&[0x44, 0x88]);
        data[at + 15..at + 18].copy_from_slice(&[0x48, 0x85, 0xC9]);

        data
    }

    #[test]
    fn test_resolves_captures_with_addends() {
        let data = test_image(0x8A8, 0x9F0);
        let image = ModuleImage::from_slice(0, &data);
        let offsets = resolve(&image, &SignatureSet::builtin());

        let get = |f| offsets.get(f).map(FieldOffset::get);
        assert_eq!(get(PhysicsField::Throttle), Some(0x8A8 + 0x10));
        assert_eq!(get(PhysicsField::Brake), Some(0x8A8 + 0x14));
        assert_eq!(get(PhysicsField::SteeringAngle), Some(0x8A8 + 0x8));
        assert_eq!(get(PhysicsField::Transformation), Some(0x9F0));
        assert_eq!(get(PhysicsField::FlyMode), Some(0x9F0 + 4));
    }

    #[test]
    fn test_absent_patterns_stay_unresolved() {
        let data = test_image(0x8A8, 0x9F0);
        let image = ModuleImage::from_slice(0, &data);
        let offsets = resolve(&image, &SignatureSet::builtin());

        assert_eq!(offsets.get(PhysicsField::Handbrake), None);
        assert_eq!(offsets.get(PhysicsField::WheelArray), None);
        assert_eq!(offsets.get(PhysicsField::FuelLevel), None);
    }

    #[test]
    fn test_zero_displacement_is_unsupported() {
        // Transformation decodes to zero; fly-mode would land at +4 but is
        // derived, so it falls with it.
        let data = test_image(0x8A8, 0);
        let image = ModuleImage::from_slice(0, &data);
        let offsets = resolve(&image, &SignatureSet::builtin());

        assert_eq!(offsets.get(PhysicsField::Transformation), None);
        assert_eq!(offsets.get(PhysicsField::FlyMode), None);
    }

    #[test]
    fn test_displacement_past_image_end() {
        // fuelLevel's displacement sits 8 bytes after a 5-byte match; place
        // the match so those trailing bytes fall outside the image.
        let mut data = vec![0x90u8; 0x40];
        let at = data.len() - 5;
        data[at..].copy_from_slice(&[0x74, 0x26, 0x0F, 0x57, 0xC9]);

        let image = ModuleImage::from_slice(0, &data);
        let offsets = resolve(&image, &SignatureSet::builtin());
        assert_eq!(offsets.get(PhysicsField::FuelLevel), None);
    }

    #[test]
    fn test_empty_image_resolves_nothing() {
        let image = ModuleImage::from_slice(0, &[]);
        let offsets = resolve(&image, &SignatureSet::builtin());
        assert!(offsets.is_empty());
    }

    #[test]
    fn test_global_install_happens_once() {
        let data = test_image(0x8A8, 0x9F0);
        let image = ModuleImage::from_slice(0, &data);
        let offsets = resolve(&image, &SignatureSet::builtin());

        // First writer wins, whether install() or global()'s lazy path.
        let installed = install(offsets.clone());
        if installed.is_ok() {
            assert_eq!(global(), &offsets);
        }
        assert!(matches!(
            install(PhysicsOffsets::default()),
            Err(Error::AlreadyInstalled)
        ));
    }
}
