use serde::Deserialize;
use std::path::PathBuf;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::constants::{ALL_INTERFACES, WINRT_INTERFACES, WINDOWS_11_BUILD};

/// Top-level settings of the `gdx` tool, loaded from `guidex.toml` plus `GUIDEX__*` overrides.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

/// Where and what to scan.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// `Include/<version>` directory of the Windows SDK.
    pub sdk_path: PathBuf,
    /// SDK build number, used for output naming.
    pub sdk_build: u32,
    /// Restrict the scan to the WinRT subfolders.
    pub only_winrt: bool,
    /// Subfolders of `sdk_path` that hold interface declarations, `/`-separated.
    pub subfolders: Vec<String>,
}

/// Output directory and formats of the exported database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub formats: Vec<ExportFormat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// File formats the database can be exported to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Ini,
    Xml,
    #[strum(to_string = "html", serialize = "htm")]
    #[serde(alias = "htm")]
    Html,
    #[strum(to_string = "rust", serialize = "rs")]
    #[serde(alias = "rs")]
    Rust,
}

impl ExportFormat {
    /// File extension written for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ini => "ini",
            Self::Xml => "xml",
            Self::Html => "htm",
            Self::Rust => "rs",
        }
    }

    #[must_use]
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl ScanSettings {
    /// Default SDK location for a given build on a standard Windows Kits install.
    #[must_use]
    pub fn default_sdk_path(build: u32) -> PathBuf {
        PathBuf::from(format!(r"C:\Program Files (x86)\Windows Kits\10\Include\10.0.{build}.0"))
    }

    /// Whether a subfolder holds WinRT declarations.
    #[must_use]
    pub fn is_winrt_folder(subfolder: &str) -> bool {
        subfolder.contains("winrt")
    }

    /// Subfolders that will actually be scanned, honoring `only_winrt`.
    pub fn effective_subfolders(&self) -> impl Iterator<Item = &str> {
        self.subfolders
            .iter()
            .map(String::as_str)
            .filter(|sub| !self.only_winrt || Self::is_winrt_folder(sub))
    }

    /// Label of the interface set produced by this scan.
    #[must_use]
    pub const fn set_name(&self) -> &'static str {
        if self.only_winrt { WINRT_INTERFACES } else { ALL_INTERFACES }
    }
}

// --- Default ---

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            sdk_path: Self::default_sdk_path(WINDOWS_11_BUILD),
            sdk_build: WINDOWS_11_BUILD,
            only_winrt: false,
            subfolders: ["winrt", "cppwinrt/winrt", "cppwinrt/winrt/impl", "um", "shared"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("."), formats: ExportFormat::all() }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
