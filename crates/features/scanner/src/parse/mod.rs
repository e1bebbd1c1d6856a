//! # Header parsing
//!
//! Turns the text of one SDK header into `(guid, name)` declarations.
//!
//! Lines are first [`preprocess`]ed, then every valid line is matched against
//! the declaration forms found in the Windows SDK, most specific first:
//! `static const UUID`, `DEFINE_GUID`, C++/WinRT `guid_v<..>` and finally any
//! line carrying a textual GUID (`MIDL_INTERFACE`, `DECLSPEC_UUID`, ...).
//! Lines that carry a GUID in an unknown form become [`Diagnostic`]s.

mod extract;
mod lines;

pub use extract::{hex_initializer_to_guid, hex_list_to_guid};
pub use lines::{is_line_valid, preprocess};

use crate::catalog::Rejection;
use lines::Cursor;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static GUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[0-9a-fA-F]{8}-([0-9a-fA-F]{4}-){3}[0-9a-fA-F]{12}").expect("GUID pattern is a valid regex")
});

const WINRT_PREFIX: &str = "ABI.";

/// Line prefixes whose name is the word right after the GUID.
const NEXT_WORD_PREFIXES: [&str; 5] = [
    "MIDL_INTERFACE",
    "ENUMG",
    "interface DX_DECLARE_INTERFACE",
    "interface DWRITE_DECLARE_INTERFACE",
    "interface DML_DECLARE_INTERFACE",
];

/// Markers that may appear anywhere in the line, after `class` or `struct`.
const NEXT_WORD_MARKERS: [&str; 2] = ["DECLSPEC_UUID", "__declspec(uuid("];

/// A GUID to name mapping found in a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub guid: String,
    pub name: String,
    /// 1-based source line.
    pub line: usize,
}

/// A problem found while scanning. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    /// 1-based source line.
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A GUID appears in a form the parser does not recognize.
    Syntax,
    /// The declaration was parsed but the catalog refused it.
    Rejected(Rejection),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Syntax => write!(f, "Syntax error in line {} in {}", self.line, self.file),
            DiagnosticKind::Rejected(rejection) => {
                write!(f, "{rejection} in line {} in {}", self.line, self.file)
            },
        }
    }
}

/// Everything found in one header.
#[derive(Debug, Default, Clone)]
pub struct ParsedHeader {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parser for the headers of one SDK subfolder.
#[derive(Debug, Clone, Copy)]
pub struct HeaderParser {
    winrt: bool,
}

impl HeaderParser {
    /// `winrt` prefixes C++/WinRT names with `ABI.` so they match the names
    /// used by the classic WinRT headers.
    #[must_use]
    pub const fn new(winrt: bool) -> Self {
        Self { winrt }
    }

    /// Parses `text`. `file` only labels diagnostics.
    #[must_use]
    pub fn parse(&self, file: &str, text: &str) -> ParsedHeader {
        let lines = preprocess(text);
        let mut cursor = Cursor::new(&lines);
        let mut parsed = ParsedHeader::default();

        while !cursor.is_done() {
            let start = cursor.pos();
            let line = cursor.current();

            if is_line_valid(line, false) {
                match self.parse_line(&mut cursor, line) {
                    Outcome::Found { guid, name } => {
                        parsed.declarations.push(Declaration { guid, name, line: start + 1 });
                    },
                    Outcome::Syntax => parsed.diagnostics.push(Diagnostic {
                        file: file.to_owned(),
                        line: start + 1,
                        kind: DiagnosticKind::Syntax,
                    }),
                    Outcome::Nothing => {},
                }
            }

            cursor.step();
        }

        parsed
    }

    fn parse_line(&self, cursor: &mut Cursor<'_>, line: &str) -> Outcome {
        if let Some(rest) = line.strip_prefix("static const UUID ") {
            return match rest.split_once('=') {
                Some((name, value)) if !value.contains('=') => {
                    let name = name.trim().to_owned();
                    cursor.brace_initializer().map_or(Outcome::Syntax, |guid| Outcome::Found { guid, name })
                },
                _ => Outcome::Syntax,
            };
        }

        if line.starts_with("DEFINE_GUID") && !line.starts_with("DEFINE_GUIDSTRUCT") && !line.starts_with("DEFINE_GUIDEX") {
            if let Some(args) = cursor.arguments(12)
                && let Some(guid) = hex_list_to_guid(&args[1..])
            {
                return Outcome::Found { guid, name: args[0].clone() };
            }
            if line.contains("STATIC_IID_") || line.contains("STATIC_CLSID_") {
                return Outcome::Nothing;
            }
            return Outcome::Syntax;
        }

        if let Some(marker) = line.find("inline constexpr guid").filter(|&at| at > 0) {
            return self.parse_guid_v(line, marker);
        }

        let Some(found) = GUID_PATTERN.find(line) else {
            return Outcome::Nothing;
        };
        let guid = found.as_str().to_uppercase();
        let mut from = found.end();

        let name = if line.starts_with("typedef DECLSPEC_UUID") || line.contains("[uuid(") {
            let kind = cursor.next_word(&mut from);
            if kind.is_empty() {
                return Outcome::Syntax;
            }
            cursor.next_word(&mut from)
        } else if NEXT_WORD_PREFIXES.iter().any(|form| line.starts_with(form))
            || NEXT_WORD_MARKERS.iter().any(|form| line.contains(form))
        {
            let start = cursor.pos();
            let word = cursor.next_word(&mut from);
            if word.is_empty() {
                return Outcome::Syntax;
            }
            format!("{}{word}", cursor.abi_namespace(start))
        } else if line.starts_with("DECLARE_INTERFACE_IID_") || line.starts_with("IMMPID_START_LIST") {
            return argument(cursor, guid, 3, 0);
        } else if line.starts_with("DECLARE_INTERFACE_IID") || line.starts_with("CROSS_PLATFORM_UUIDOF") {
            return argument(cursor, guid, 2, 0);
        } else if line.starts_with("DEFINE_GUIDSTRUCT") {
            return argument(cursor, guid, 2, 1);
        } else if line.starts_with("DEFINE_CODECAPI_GUID") {
            return argument(cursor, guid, 13, 0);
        } else if let Some(rest) = line.strip_prefix("const BSTR ") {
            match rest.split_once('=') {
                Some((name, value)) if !value.contains('=') => name.trim().to_owned(),
                _ => return Outcome::Syntax,
            }
        } else if line.starts_with("DECLARE_EVENTGUID_STRING") {
            // The matching DEFINE_GUID follows.
            return Outcome::Nothing;
        } else {
            return Outcome::Syntax;
        };

        Outcome::Found { guid, name }
    }

    /// `template <> inline constexpr guid guid_v<Windows::Foo::IBar>{ .. };`
    fn parse_guid_v(&self, line: &str, marker: usize) -> Outcome {
        let open = line[marker..].find('<').map(|at| at + marker);
        let close = line.rfind('>');
        let (Some(open), Some(close)) = (open, close) else {
            return Outcome::Nothing;
        };
        if open >= close {
            return Outcome::Nothing;
        }

        let name = line[open + 1..close].replace("::", ".");
        let Some(guid) = hex_initializer_to_guid(line) else {
            return Outcome::Nothing;
        };
        if name.len() <= 3 {
            return Outcome::Syntax;
        }

        let name = if self.winrt && name.contains('.') && !name.starts_with(WINRT_PREFIX) {
            format!("{WINRT_PREFIX}{name}")
        } else {
            name
        };
        Outcome::Found { guid, name }
    }
}

enum Outcome {
    Found { guid: String, name: String },
    Syntax,
    Nothing,
}

fn argument(cursor: &mut Cursor<'_>, guid: String, arity: usize, index: usize) -> Outcome {
    match cursor.arguments(arity) {
        Some(mut args) => Outcome::Found { guid, name: args.swap_remove(index) },
        None => Outcome::Syntax,
    }
}
