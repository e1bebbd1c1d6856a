//! Windows registry access.

use super::ActivatableClasses;
use crate::error::{ScanError, ScanErrorExt};
use tracing::{debug, info};
use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_64KEY};

const ACTIVATABLE_CLASS_ID: &str = r"Software\Microsoft\WindowsRuntime\ActivatableClassId";
const CURRENT_VERSION: &str = r"Software\Microsoft\Windows NT\CurrentVersion";

// The 64 bit view is used on 64 bit Windows, even from a 32 bit process.
const ACCESS: u32 = KEY_READ | KEY_WOW64_64KEY;

/// Reads every activatable class with a `DllPath` from the registry.
///
/// # Errors
/// [`ScanError::Io`] when the `ActivatableClassId` key cannot be opened or enumerated.
pub fn read_activatable_classes() -> Result<ActivatableClasses, ScanError> {
    let root = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey_with_flags(ACTIVATABLE_CLASS_ID, ACCESS)
        .context(format!(r"Opening HKLM\{ACTIVATABLE_CLASS_ID}"))?;

    let mut classes = ActivatableClasses::new();
    let mut servers = 0_usize;

    for class in root.enum_keys() {
        let class = class.context("Enumerating activatable classes")?;
        let Ok(key) = root.open_subkey_with_flags(&class, ACCESS) else {
            debug!(class = %class, "Activatable class key not readable, skipping");
            continue;
        };

        match key.get_value::<String, _>("DllPath") {
            Ok(dll) => classes.add(&dll, &class),
            // Activated by an out-of-process server.
            Err(_) => servers += 1,
        }
    }

    info!(classes = classes.len(), dlls = classes.dll_count(), servers, "Activatable classes read");
    Ok(classes)
}

/// Build number of the running Windows.
///
/// # Errors
/// * [`ScanError::Io`] when the value cannot be read.
/// * [`ScanError::Internal`] when it is not a number.
pub fn windows_build() -> Result<u32, ScanError> {
    let build: String = RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey_with_flags(CURRENT_VERSION, ACCESS)
        .and_then(|key| key.get_value("CurrentBuildNumber"))
        .context(format!(r"Reading HKLM\{CURRENT_VERSION}\CurrentBuildNumber"))?;

    build.trim().parse().map_err(|_| ScanError::from(format!("Unexpected Windows build number {build:?}")))
}
