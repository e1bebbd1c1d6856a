//! Names and limits of the GUID database format.

/// INI section holding `GUID = Name` entries. Used for both interface sets.
pub const INTERFACE_SECTION: &str = "All Interfaces";

/// Label of the complete interface set (all SDK subfolders).
pub const ALL_INTERFACES: &str = "All Interfaces";

/// Label of the WinRT-only interface set.
pub const WINRT_INTERFACES: &str = "WinRT Interfaces";

/// Label of the activatable class export.
pub const ACTIVATABLE_CLASSES: &str = "WinRT Activatable Classes";

/// Length of a GUID in registry format without braces.
pub const GUID_LEN: usize = 36;

/// Byte offsets of the dashes in a registry-format GUID.
pub const GUID_DASHES: [usize; 4] = [8, 13, 18, 23];

/// First Windows 10 SDK build number.
pub const WINDOWS_10_BUILD: u32 = 10_000;

/// First Windows 11 SDK build number.
pub const WINDOWS_11_BUILD: u32 = 22_000;
