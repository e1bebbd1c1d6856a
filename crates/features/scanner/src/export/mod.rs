//! # Export
//!
//! Writes a catalog as an interface database. The INI output is the file read
//! by `guidex_lookup::ini`; the Rust output is the table embedded by
//! `guidex_lookup::registry`. [`ClassExporter`] writes the activatable
//! classes read from the registry as INI, XML or HTML.

mod error;
mod render;

pub use error::{ExportError, ExportErrorExt};

use crate::activation::ActivatableClasses;
use crate::catalog::InterfaceCatalog;
use guidex_domain::config::{ExportFormat, Settings};
use guidex_domain::constants::{
    ACTIVATABLE_CLASSES, ALL_INTERFACES, WINDOWS_10_BUILD, WINDOWS_11_BUILD, WINRT_INTERFACES,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Windows release and build an SDK belongs to, e.g. `Windows 10 (Build 19041)`.
#[must_use]
pub fn windows_version(build: u32) -> String {
    let release = if build >= WINDOWS_11_BUILD {
        "11"
    } else if build >= WINDOWS_10_BUILD {
        "10"
    } else {
        "8"
    };
    format!("Windows {release} (Build {build})")
}

#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    windows: String,
    set_name: &'static str,
}

impl Exporter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, build: u32, only_winrt: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            windows: windows_version(build),
            set_name: if only_winrt { WINRT_INTERFACES } else { ALL_INTERFACES },
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.export.output_dir, settings.scan.sdk_build, settings.scan.only_winrt)
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `Windows 11 (Build 22000) All Interfaces.ini`
    #[must_use]
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{} {}.{}", self.windows, self.set_name, format.extension())
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("{} - Windows GUID Database", self.set_name)
    }

    #[must_use]
    pub fn comment(&self, catalog: &InterfaceCatalog) -> String {
        format!(
            "{} interfaces automatically extracted from the {} SDK header files",
            catalog.len(),
            self.windows
        )
    }

    /// Renders `catalog` in `format` without touching the disk.
    ///
    /// # Errors
    /// [`ExportError::Format`] if writing into the buffer fails.
    pub fn render(&self, catalog: &InterfaceCatalog, format: ExportFormat) -> Result<String, ExportError> {
        let header = render::Header { title: self.title(), comment: self.comment(catalog) };
        render::render(&header, catalog, format)
    }

    /// Writes one file per format into the output directory and returns their paths.
    ///
    /// Nothing is written for an empty catalog.
    ///
    /// # Errors
    /// [`ExportError::Io`] when the directory or a file cannot be written.
    pub fn write(&self, catalog: &InterfaceCatalog, formats: &[ExportFormat]) -> Result<Vec<PathBuf>, ExportError> {
        if catalog.is_empty() {
            warn!("No interfaces found, nothing to export");
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.output_dir).context(format!("Creating {}", self.output_dir.display()))?;

        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            let content = self.render(catalog, format).context(format.to_string())?;
            written.push(write_file(&self.output_dir.join(self.file_name(format)), &content)?);
        }

        Ok(written)
    }
}

/// Writes the activatable classes of one Windows build.
#[derive(Debug, Clone)]
pub struct ClassExporter {
    output_dir: PathBuf,
    windows: String,
}

impl ClassExporter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, build: u32) -> Self {
        Self { output_dir: output_dir.into(), windows: windows_version(build) }
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `Windows 11 (Build 22621) WinRT Activatable Classes.ini`
    #[must_use]
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{} {ACTIVATABLE_CLASSES}.{}", self.windows, format.extension())
    }

    #[must_use]
    pub fn comment(&self, classes: &ActivatableClasses) -> String {
        format!("{} Activatable Classes automatically extracted from the {} Registry", classes.len(), self.windows)
    }

    /// Renders `classes` in `format` without touching the disk.
    ///
    /// # Errors
    /// * [`ExportError::Internal`] for [`ExportFormat::Rust`], which has no class layout.
    /// * [`ExportError::Format`] if writing into the buffer fails.
    pub fn render(&self, classes: &ActivatableClasses, format: ExportFormat) -> Result<String, ExportError> {
        let header = render::Header { title: ACTIVATABLE_CLASSES.to_owned(), comment: self.comment(classes) };
        render::render_classes(&header, classes, format)
    }

    /// Writes one file per format and returns their paths. The Rust format is
    /// skipped; nothing is written when there are no classes.
    ///
    /// # Errors
    /// [`ExportError::Io`] when the directory or a file cannot be written.
    pub fn write(&self, classes: &ActivatableClasses, formats: &[ExportFormat]) -> Result<Vec<PathBuf>, ExportError> {
        if classes.is_empty() {
            warn!("No activatable classes found, nothing to export");
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.output_dir).context(format!("Creating {}", self.output_dir.display()))?;

        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            if format == ExportFormat::Rust {
                warn!(%format, "Activatable classes have no Rust table, skipping");
                continue;
            }
            let content = self.render(classes, format).context(format.to_string())?;
            written.push(write_file(&self.output_dir.join(self.file_name(format)), &content)?);
        }

        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf, ExportError> {
    fs::write(path, content).context(format!("Writing {}", path.display()))?;
    info!(path = %path.display(), "Exported");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_versions() {
        assert_eq!(windows_version(22621), "Windows 11 (Build 22621)");
        assert_eq!(windows_version(22000), "Windows 11 (Build 22000)");
        assert_eq!(windows_version(19041), "Windows 10 (Build 19041)");
        assert_eq!(windows_version(9600), "Windows 8 (Build 9600)");
    }

    #[test]
    fn names_follow_build_and_set() {
        let all = Exporter::new(".", 22000, false);
        assert_eq!(all.file_name(ExportFormat::Ini), "Windows 11 (Build 22000) All Interfaces.ini");
        assert_eq!(all.title(), "All Interfaces - Windows GUID Database");

        let winrt = Exporter::new(".", 19041, true);
        assert_eq!(winrt.file_name(ExportFormat::Html), "Windows 10 (Build 19041) WinRT Interfaces.htm");
        assert_eq!(
            winrt.comment(&InterfaceCatalog::with_undocumented()),
            "3 interfaces automatically extracted from the Windows 10 (Build 19041) SDK header files"
        );
    }

    #[test]
    fn builds_of_one_release_get_distinct_files() {
        let older = Exporter::new(".", 18362, false).file_name(ExportFormat::Ini);
        let newer = Exporter::new(".", 19041, false).file_name(ExportFormat::Ini);
        assert_ne!(older, newer);
    }

    #[test]
    fn class_files_skip_the_rust_format() {
        let root = tempfile::tempdir().expect("temp dir");
        let classes: ActivatableClasses =
            [(r"C:\Windows\System32\Windows.Web.dll", "Windows.Foundation.Uri")].into_iter().collect();
        let exporter = ClassExporter::new(root.path(), 22621);

        assert_eq!(
            exporter.comment(&classes),
            "1 Activatable Classes automatically extracted from the Windows 11 (Build 22621) Registry"
        );

        let written = exporter.write(&classes, &ExportFormat::all()).expect("write classes");
        let names: Vec<_> = written.iter().filter_map(|path| path.file_name()?.to_str()).collect();
        assert_eq!(
            names,
            [
                "Windows 11 (Build 22621) WinRT Activatable Classes.ini",
                "Windows 11 (Build 22621) WinRT Activatable Classes.xml",
                "Windows 11 (Build 22621) WinRT Activatable Classes.htm",
            ]
        );
    }

    #[test]
    fn empty_catalog_writes_nothing() {
        let root = tempfile::tempdir().expect("temp dir");
        let dir = root.path().join("out");
        let written = Exporter::new(&dir, 22000, false).write(&InterfaceCatalog::new(), &ExportFormat::all());
        assert!(written.is_ok_and(|paths| paths.is_empty()));
        assert!(!dir.exists());
    }
}
