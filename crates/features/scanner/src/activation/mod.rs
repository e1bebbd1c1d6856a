//! # Activatable classes
//!
//! WinRT runtime classes registered under
//! `HKLM\Software\Microsoft\WindowsRuntime\ActivatableClassId`, grouped by the
//! DLL that activates them. Classes served by an out-of-process server have
//! no `DllPath` and are not collected.
//!
//! The catalog itself is platform independent; only [`read_activatable_classes`]
//! and [`windows_build`] need the Windows registry.

#[cfg(windows)]
mod registry;

#[cfg(windows)]
pub use registry::{read_activatable_classes, windows_build};

use std::collections::BTreeMap;

#[cfg(not(windows))]
use crate::error::ScanError;

/// Activatable classes per DLL. DLL paths compare case-insensitively and keep
/// the spelling first seen; classes are kept sorted.
#[derive(Debug, Default, Clone)]
pub struct ActivatableClasses {
    dlls: BTreeMap<String, Dll>,
    total: usize,
}

#[derive(Debug, Clone)]
struct Dll {
    path: String,
    classes: Vec<String>,
}

impl ActivatableClasses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `class` is activated by `dll`. Repeated pairs are ignored.
    pub fn add(&mut self, dll: &str, class: &str) {
        let dll = dll.trim();
        let entry = self
            .dlls
            .entry(dll.to_lowercase())
            .or_insert_with(|| Dll { path: dll.to_owned(), classes: Vec::new() });

        if let Err(at) = entry.classes.binary_search_by(|known| known.as_str().cmp(class)) {
            entry.classes.insert(at, class.to_owned());
            self.total += 1;
        }
    }

    /// Number of classes over all DLLs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn dll_count(&self) -> usize {
        self.dlls.len()
    }

    /// `(dll path, sorted classes)` in DLL path order.
    pub fn dlls(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dlls.values().map(|dll| (dll.path.as_str(), dll.classes.as_slice()))
    }
}

impl<D: AsRef<str>, C: AsRef<str>> FromIterator<(D, C)> for ActivatableClasses {
    fn from_iter<I: IntoIterator<Item = (D, C)>>(pairs: I) -> Self {
        let mut classes = Self::new();
        for (dll, class) in pairs {
            classes.add(dll.as_ref(), class.as_ref());
        }
        classes
    }
}

/// Reads every activatable class with a `DllPath` from the registry.
///
/// # Errors
/// [`ScanError::RegistryUnavailable`]: there is no registry off Windows.
#[cfg(not(windows))]
pub fn read_activatable_classes() -> Result<ActivatableClasses, ScanError> {
    Err(unavailable())
}

/// Build number of the running Windows.
///
/// # Errors
/// [`ScanError::RegistryUnavailable`]: there is no registry off Windows.
#[cfg(not(windows))]
pub fn windows_build() -> Result<u32, ScanError> {
    Err(unavailable())
}

#[cfg(not(windows))]
fn unavailable() -> ScanError {
    ScanError::RegistryUnavailable {
        message: "activatable classes are only registered on Windows".into(),
        context: Some("HKLM".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActivatableClasses {
        [
            (r"C:\Windows\System32\Windows.Web.dll", "Windows.Foundation.Uri"),
            (r"C:\Windows\System32\Windows.Storage.dll", "Windows.Storage.StorageFolder"),
            (r"c:\windows\system32\windows.web.dll", "Windows.Foundation.WwwFormUrlDecoder"),
            (r"C:\Windows\System32\Windows.Storage.dll", "Windows.Storage.StorageFile"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn groups_by_dll_ignoring_case() {
        let classes = sample();
        assert_eq!(classes.len(), 4);
        assert_eq!(classes.dll_count(), 2);

        let dlls: Vec<_> = classes.dlls().collect();
        assert_eq!(dlls[0].0, r"C:\Windows\System32\Windows.Storage.dll");
        assert_eq!(dlls[1].0, r"C:\Windows\System32\Windows.Web.dll");
        assert_eq!(dlls[1].1, ["Windows.Foundation.Uri", "Windows.Foundation.WwwFormUrlDecoder"]);
    }

    #[test]
    fn classes_are_sorted_and_unique() {
        let mut classes = sample();
        classes.add(r"C:\Windows\System32\Windows.Storage.dll", "Windows.Storage.StorageFile");

        assert_eq!(classes.len(), 4);
        let storage = classes.dlls().next().map(|(_, classes)| classes.to_vec()).unwrap_or_default();
        assert_eq!(storage, ["Windows.Storage.StorageFile", "Windows.Storage.StorageFolder"]);
    }

    #[test]
    fn empty_catalog() {
        let classes = ActivatableClasses::new();
        assert!(classes.is_empty());
        assert_eq!(classes.dlls().count(), 0);
    }

    #[cfg(not(windows))]
    #[test]
    fn registry_is_unavailable_off_windows() {
        assert!(matches!(read_activatable_classes(), Err(ScanError::RegistryUnavailable { .. })));
        assert!(windows_build().is_err());
    }
}
