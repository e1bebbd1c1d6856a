//! Walks the include folders of a Windows SDK and fills a catalog.

use crate::catalog::InterfaceCatalog;
use crate::error::{ScanError, ScanErrorExt};
use crate::parse::{Diagnostic, DiagnosticKind, HeaderParser};
use guidex_domain::config::ScanSettings;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const HEADER_EXTENSION: &str = "h";

/// Result of a scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub catalog: InterfaceCatalog,
    /// Number of header files parsed.
    pub files: usize,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone)]
pub struct SdkScanner {
    settings: ScanSettings,
}

impl SdkScanner {
    #[must_use]
    pub const fn new(settings: ScanSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Parses every `*.h` file directly inside the configured subfolders.
    ///
    /// Missing subfolders are skipped with a warning. The undocumented WinRT
    /// factories are added after the headers.
    ///
    /// # Errors
    /// * [`ScanError::SdkNotFound`] when the SDK path is not a directory.
    /// * [`ScanError::Walk`] / [`ScanError::Io`] when a folder or header cannot be read.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let root = &self.settings.sdk_path;
        if !root.is_dir() {
            return Err(ScanError::SdkNotFound {
                message: root.display().to_string().into(),
                context: Some(Cow::Borrowed("scan.sdk_path")),
            });
        }

        let mut report = ScanReport::default();

        for subfolder in self.settings.effective_subfolders() {
            let folder = subfolder.split('/').fold(root.clone(), |path, part| path.join(part));
            if !folder.is_dir() {
                warn!(folder = %folder.display(), "SDK subfolder not found, skipping");
                continue;
            }

            info!(subfolder, "Parsing SDK header files");
            let parser = HeaderParser::new(ScanSettings::is_winrt_folder(subfolder));

            for path in header_files(&folder)? {
                let label = label(subfolder, &path);
                let bytes = fs::read(&path).context(format!("Reading {}", path.display()))?;
                let parsed = parser.parse(&label, &decode(&bytes));
                report.files += 1;

                for declaration in parsed.declarations {
                    if let Err(rejection) = report.catalog.add(&declaration.guid, &declaration.name) {
                        report.diagnostics.push(Diagnostic {
                            file: label.clone(),
                            line: declaration.line,
                            kind: DiagnosticKind::Rejected(rejection),
                        });
                    }
                }
                report.diagnostics.extend(parsed.diagnostics);
            }
        }

        report.catalog.add_undocumented();

        for diagnostic in &report.diagnostics {
            warn!("{diagnostic}");
        }
        info!(
            files = report.files,
            interfaces = report.catalog.len(),
            guids = report.catalog.guid_count(),
            diagnostics = report.diagnostics.len(),
            "SDK scan finished"
        );

        Ok(report)
    }
}

/// Header files directly inside `folder`, sorted by name.
fn header_files(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.context(format!("Listing {}", folder.display()))?;
        let is_header = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(HEADER_EXTENSION));
        if entry.file_type().is_file() && is_header {
            files.push(entry.into_path());
        }
    }

    debug!(folder = %folder.display(), headers = files.len(), "Listed header files");
    Ok(files)
}

fn label(subfolder: &str, path: &Path) -> String {
    let file = path.file_name().map_or(Cow::Borrowed(""), |name| name.to_string_lossy());
    format!("{subfolder}/{file}")
}

/// Decodes a header as UTF-8, or UTF-16 LE when it starts with a byte order
/// mark. Invalid sequences are replaced.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        let units = rest.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
        return Cow::Owned(char::decode_utf16(units).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)).collect());
    }
    String::from_utf8_lossy(bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_handles_byte_order_marks() {
        assert_eq!(decode(b"\xEF\xBB\xBFabc"), "abc");
        assert_eq!(decode(&[0xFF, 0xFE, b'h', 0, b'i', 0]), "hi");
        assert_eq!(decode(b"plain \xFF"), "plain \u{FFFD}");
    }

    #[test]
    fn labels_use_the_subfolder() {
        assert_eq!(label("cppwinrt/winrt", Path::new("/sdk/cppwinrt/winrt/Windows.Foundation.h")), "cppwinrt/winrt/Windows.Foundation.h");
    }
}
