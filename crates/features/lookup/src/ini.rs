//! INI-backed lookup.
//!
//! The database is a plain INI file whose `[All Interfaces]` section maps
//! GUIDs to names, one `GUID = Name` per line. Key matching ignores case.
//! When a key is listed more than once (ambiguous GUIDs), the first entry wins.

use crate::error::{LookupError, LookupErrorExt};
use ::ini::{Ini, ParseOption};
use fxhash::FxHashMap;
use guidex_domain::constants::INTERFACE_SECTION;
use guidex_domain::guid::normalize_key;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads `guid` from the `[All Interfaces]` section of the INI file at `ini_path`.
///
/// Returns `guid` unchanged when the file, the section or the key is missing.
///
/// ```rust,no_run
/// let name = guidex_lookup::ini::interface_name(
///     "00000035-0000-0000-C000-000000000046",
///     "Windows 11 (Build 22000) All Interfaces.ini",
/// );
/// ```
pub fn interface_name(guid: &str, ini_path: impl AsRef<Path>) -> String {
    match IniCatalog::load(ini_path.as_ref()) {
        Ok(catalog) => catalog.interface_name(guid),
        Err(err) => {
            warn!(%err, "Interface database unavailable, returning GUID unchanged");
            guid.to_owned()
        },
    }
}

/// The `[All Interfaces]` section of one INI file, read once.
#[derive(Debug, Clone)]
pub struct IniCatalog {
    path: PathBuf,
    names: FxHashMap<String, String>,
}

impl IniCatalog {
    /// Reads and indexes the INI file.
    ///
    /// # Errors
    /// * [`LookupError::Ini`] when the file is missing or is not valid INI.
    /// * [`LookupError::MissingSection`] when there is no `[All Interfaces]` section.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let path = path.as_ref();

        let ini = Ini::load_from_file_opt(path, parse_option()).context(format!("Reading {}", path.display()))?;

        let section = ini
            .iter()
            .find_map(|(name, properties)| {
                name.is_some_and(|name| name.trim().eq_ignore_ascii_case(INTERFACE_SECTION)).then_some(properties)
            })
            .ok_or_else(|| LookupError::MissingSection {
                message: format!("[{INTERFACE_SECTION}]").into(),
                context: Some(path.display().to_string().into()),
            })?;

        let mut names = FxHashMap::default();
        for (guid, name) in section.iter() {
            names.entry(normalize_key(guid)).or_insert_with(|| name.trim().to_owned());
        }

        debug!(path = %path.display(), entries = names.len(), "Loaded interface database");

        Ok(Self { path: path.to_path_buf(), names })
    }

    /// The mapped name, if any.
    #[must_use]
    pub fn name_of(&self, guid: &str) -> Option<&str> {
        self.names.get(&normalize_key(guid)).map(String::as_str)
    }

    /// The mapped name, or `guid` unchanged.
    #[must_use]
    pub fn interface_name(&self, guid: &str) -> String {
        self.name_of(guid).map_or_else(|| guid.to_owned(), str::to_owned)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Values are taken verbatim: names may contain quotes and backslashes.
fn parse_option() -> ParseOption {
    ParseOption { enabled_quote: false, enabled_escape: false, ..ParseOption::default() }
}
