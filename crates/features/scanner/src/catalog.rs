//! The interface catalog: names, the GUIDs they own and ambiguous GUIDs.

use guidex_domain::guid::{is_canonical, strip_decoration};
use std::collections::BTreeMap;

/// Names that appear where an identifier is expected but are keywords or types.
const RESERVED_NAMES: [&str; 8] = ["struct", "class", "enum", "null", "DWORD", "__int64", "long", "__declspec"];

/// WinRT factories that are not declared in any public header.
pub const UNDOCUMENTED: [(&str, &str); 3] = [
    ("343BAA78-E34F-466C-9FFA-81AF5CE4CD34", "ABI.Windows.Internal.Security.SmartScreen.IAppReputationServiceFactory"),
    ("3EAD2336-B073-456F-BCAF-82587EB63487", "ABI.Windows.UI.Xaml.Hosting.IXamlIslandFactory"),
    ("DE27A01F-B561-4531-A278-FD012679EF1E", "ABI.Windows.Internal.Holographic.UI.IHolographicViewPropertiesFactory"),
];

/// Why a declaration was not added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Invalid GUID '{0}'")]
    InvalidGuid(String),
    #[error("Invalid name '{name}' for GUID {guid}")]
    InvalidName { guid: String, name: String },
}

/// One exported row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub guid: &'a str,
    pub name: &'a str,
    /// Every name seen for `guid`, when more than one unrelated name was seen.
    pub ambiguity: Option<&'a [String]>,
}

#[derive(Debug, Default, Clone)]
pub struct InterfaceCatalog {
    /// Name to GUIDs, newest first.
    by_name: BTreeMap<String, Vec<String>>,
    /// GUID to the name it currently resolves to.
    by_guid: BTreeMap<String, String>,
    ambiguous: BTreeMap<String, Vec<String>>,
}

impl InterfaceCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding only the [`UNDOCUMENTED`] interfaces.
    #[must_use]
    pub fn with_undocumented() -> Self {
        let mut catalog = Self::new();
        catalog.add_undocumented();
        catalog
    }

    pub fn add_undocumented(&mut self) {
        for (guid, name) in UNDOCUMENTED {
            let added = self.add(guid, name);
            debug_assert!(added.is_ok(), "undocumented entries are canonical");
        }
    }

    /// Records that `guid` identifies `name`.
    ///
    /// When the GUID already has a name and one of the two names extends the
    /// other (`IFoo` / `Ns.IFoo`, or `Ns.Foo` / `Ns.IFoo`), the longer one is
    /// kept. Unrelated names make the GUID ambiguous; the newest name wins the
    /// lookup but every name is remembered.
    ///
    /// # Errors
    /// [`Rejection`] when the GUID is not canonical or the name is too short
    /// or a reserved word.
    pub fn add(&mut self, guid: &str, name: &str) -> Result<(), Rejection> {
        let guid = strip_decoration(guid).to_uppercase();
        let mut name = name.trim_matches(['"', ' ']).to_owned();

        if !is_canonical(&guid) {
            return Err(Rejection::InvalidGuid(guid));
        }
        if name.chars().count() < 2 || RESERVED_NAMES.contains(&name.as_str()) {
            return Err(Rejection::InvalidName { guid, name });
        }

        if let Some(existing) = self.by_guid.get(&guid) {
            if existing.contains(name.as_str()) || existing.contains(&with_interface_prefix(&name)) {
                name.clone_from(existing);
            } else if !(name.contains(existing.as_str()) || name.contains(&with_interface_prefix(existing))) {
                let names = self.ambiguous.entry(guid.clone()).or_default();
                for candidate in [&name, existing] {
                    if !names.contains(candidate) {
                        names.push(candidate.clone());
                    }
                }
            }
        }

        self.by_guid.insert(guid.clone(), name.clone());
        let guids = self.by_name.entry(name).or_default();
        if !guids.contains(&guid) {
            guids.insert(0, guid);
        }
        Ok(())
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of distinct GUIDs.
    #[must_use]
    pub fn guid_count(&self) -> usize {
        self.by_guid.len()
    }

    /// The name `guid` currently resolves to.
    #[must_use]
    pub fn name_of(&self, guid: &str) -> Option<&str> {
        self.by_guid.get(&guid.to_uppercase()).map(String::as_str)
    }

    /// Every name seen for an ambiguous `guid`, newest first.
    #[must_use]
    pub fn ambiguity(&self, guid: &str) -> Option<&[String]> {
        self.ambiguous.get(&guid.to_uppercase()).map(Vec::as_slice)
    }

    /// All rows, sorted by name, then by GUID from newest to oldest.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.by_name.iter().flat_map(move |(name, guids)| {
            guids.iter().map(move |guid| Entry {
                guid,
                name,
                ambiguity: self.ambiguous.get(guid).map(Vec::as_slice),
            })
        })
    }
}

/// Inserts `I` after the last `.` outside template arguments:
/// `ABI.Windows.Foo` becomes `ABI.Windows.IFoo`.
fn with_interface_prefix(name: &str) -> String {
    let limit = name.find('<').unwrap_or(name.len());
    match name[..limit].rfind('.') {
        Some(dot) if dot > 0 => format!("{}I{}", &name[..=dot], &name[dot + 1..]),
        _ => name.to_owned(),
    }
}
