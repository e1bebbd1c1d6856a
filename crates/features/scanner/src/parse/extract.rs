//! Extraction of GUIDs, argument lists, words and namespaces from lines.

use super::lines::{Cursor, collapse_whitespace, is_line_valid};
use std::fmt::Write;

const NAMESPACE: &str = "namespace";
const NAMESPACE_DEPTH: usize = 8;
const ABI_ROOT: &str = "ABI";

/// Converts the 11 numeric parts of a `GUID` initializer to canonical text.
///
/// Parts may be hex (`0x1D262760`) or decimal (`0`), with an optional `L`
/// suffix. Returns `None` when a part does not parse or overflows its field.
#[must_use]
pub fn hex_list_to_guid<S: AsRef<str>>(parts: &[S]) -> Option<String> {
    if parts.len() != 11 {
        return None;
    }

    let mut values = [0_u32; 11];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = parse_number(part.as_ref())?;
    }

    if values[1] > 0xFFFF || values[2] > 0xFFFF || values[3..].iter().any(|&b| b > 0xFF) {
        return None;
    }

    let mut guid = format!("{:08X}-{:04X}-{:04X}-{:02X}{:02X}-", values[0], values[1], values[2], values[3], values[4]);
    for byte in &values[5..] {
        write!(guid, "{byte:02X}").ok()?;
    }
    Some(guid)
}

fn parse_number(part: &str) -> Option<u32> {
    let upper = part.trim().to_uppercase();
    let digits = upper.trim_end_matches('L');
    match digits.strip_prefix("0X") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => digits.parse().ok(),
    }
}

/// Reads a brace initializer `{ l, w1, w2, { b1, .., b8 } }` found in `text`.
#[must_use]
pub fn hex_initializer_to_guid(text: &str) -> Option<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let start = compact.find('{')?;
    let end = compact.find("}}")?;
    if end <= start {
        return None;
    }

    let body = compact[start..end].replace('{', "");
    let parts: Vec<&str> = body.split(',').collect();
    hex_list_to_guid(&parts)
}

impl Cursor<'_> {
    /// Collects a multi-line brace initializer, starting at the current line,
    /// until two closing braces have been seen.
    pub(crate) fn brace_initializer(&mut self) -> Option<String> {
        let mut text = String::new();
        let mut closing = 0;

        loop {
            let line = self.current();
            if !is_line_valid(line, true) {
                return None;
            }
            closing += line.matches('}').count();
            text.push_str(line);
            if closing >= 2 {
                return hex_initializer_to_guid(&text);
            }
            self.advance_valid(true)?;
        }
    }

    /// Splits the first parenthesized argument list, which may continue on
    /// the following lines, and checks its arity.
    pub(crate) fn arguments(&mut self, expected: usize) -> Option<Vec<String>> {
        let mut text = self.current().to_owned();
        while !(text.contains('(') && text.contains(')')) {
            text.push_str(self.advance_valid(false)?);
        }

        let start = text.find('(')? + 1;
        let end = text[start..].find(')')? + start;
        let parts: Vec<String> = text[start..end].split(',').map(|p| p.trim().to_owned()).collect();

        (parts.len() == expected).then_some(parts)
    }

    /// Reads the next word of the current line after byte offset `from`,
    /// moving on to following lines when the current one is exhausted.
    ///
    /// A word is made of letters, digits and `_<.>*`; anything between `<`
    /// and `>` belongs to it. `::` separators become `.`.
    pub(crate) fn next_word(&mut self, from: &mut usize) -> String {
        let mut chars: Vec<char> =
            self.current().get(*from..).unwrap_or_default().replace("::", ".").chars().collect();
        let mut index = 0;
        let mut word = String::new();
        let mut in_template = false;

        loop {
            let Some(&c) = chars.get(index) else {
                if !word.is_empty() {
                    break;
                }
                let Some(line) = self.advance_valid(false) else { break };
                chars = line.replace("::", ".").chars().collect();
                index = 0;
                *from = 0;
                continue;
            };

            match c {
                '<' => in_template = true,
                '>' => in_template = false,
                _ => {},
            }

            if in_template || c.is_alphanumeric() || "_<.>*".contains(c) {
                word.push(c);
            } else if !word.is_empty() {
                break;
            }
            index += 1;
        }

        *from += chars[..index].iter().map(|c| c.len_utf8()).sum::<usize>();
        tidy_word(&word)
    }

    /// The `namespace` chain enclosing line `index`, when it is rooted at
    /// `ABI`, as a dotted prefix (`ABI.Windows.Foundation.`).
    pub(crate) fn abi_namespace(&self, mut index: usize) -> String {
        let mut prefix = String::new();

        for _ in 0..NAMESPACE_DEPTH {
            let Some(line) = self.previous_valid(&mut index) else { break };

            let mut rest = line;
            while let Some(found) = rest.rfind(NAMESPACE) {
                let namespace = rest[found + NAMESPACE.len()..].trim_matches([' ', '{']);
                rest = &rest[..found];
                prefix = format!("{namespace}.{prefix}");
                if namespace == ABI_ROOT {
                    return prefix;
                }
            }
        }

        String::new()
    }
}

fn tidy_word(word: &str) -> String {
    let word = word.replace("<.", "<");
    let word = word.trim_end_matches('*').replace(',', ", ");
    collapse_whitespace(&word)
}
