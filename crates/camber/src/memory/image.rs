//! Views over mapped (or dumped) executable images.

use crate::scan::{self, Pattern};

/// Borrowed byte view of a module image, paired with its load base.
///
/// The view is bounded by the image size known to the loader, so scans never
/// touch pages outside the mapped range. Dumped images use
/// [`ModuleImage::from_slice`] with whatever base the dump was taken at.
#[derive(Debug, Clone, Copy)]
pub struct ModuleImage<'a> {
    base: u64,
    data: &'a [u8],
}

impl<'a> ModuleImage<'a> {
    pub fn from_slice(base: u64, data: &'a [u8]) -> Self {
        Self { base, data }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// First match position within the image.
    pub fn find(&self, pattern: &Pattern) -> Option<usize> {
        scan::find_pattern(self.data, pattern)
    }

    /// First match as an absolute address.
    pub fn find_address(&self, pattern: &Pattern) -> Option<u64> {
        self.find(pattern).map(|pos| self.base + pos as u64)
    }
}

/// The current process's main module image.
///
/// Scans are bounded by `SizeOfImage`, which covers the mapped text and data
/// segments of the executable.
#[cfg(target_os = "windows")]
pub fn host_module() -> crate::error::Result<ModuleImage<'static>> {
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::System::ProcessStatus::{K32GetModuleInformation, MODULEINFO};
    use windows::Win32::System::Threading::GetCurrentProcess;

    use crate::error::Error;

    unsafe {
        let module =
            GetModuleHandleW(None).map_err(|e| Error::ModuleImage(e.to_string()))?;

        let mut info = MODULEINFO {
            lpBaseOfDll: std::ptr::null_mut(),
            SizeOfImage: 0,
            EntryPoint: std::ptr::null_mut(),
        };
        let ok = K32GetModuleInformation(
            GetCurrentProcess(),
            module,
            &mut info,
            size_of::<MODULEINFO>() as u32,
        );
        if !ok.as_bool() || info.lpBaseOfDll.is_null() {
            return Err(Error::ModuleImage(
                "K32GetModuleInformation failed".to_string(),
            ));
        }

        let base = info.lpBaseOfDll as *const u8;
        let data = std::slice::from_raw_parts(base, info.SizeOfImage as usize);
        Ok(ModuleImage::from_slice(base as u64, data))
    }
}
