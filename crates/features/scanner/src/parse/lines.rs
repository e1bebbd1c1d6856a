//! Line preparation and navigation over preprocessed header text.

/// How many lines a forward or backward search for a valid line may skip.
pub(crate) const SEARCH_WINDOW: usize = 7;

const NOVTABLE: [&str; 2] = ["__declspec(novtable)", "DECLSPEC_NOVTABLE"];
const SKIPPED_PREFIXES: [&str; 4] = ["#if ", "#endif", "#define ", "DEPRECATED"];

/// Splits header text into cleaned lines, one entry per source line.
///
/// Continued lines (`\` at the end) are joined into the following line and
/// leave an empty entry behind, so indices keep matching source line numbers.
/// Comments are removed, including block comments spanning lines. Whitespace
/// runs are collapsed to a single space.
#[must_use]
pub fn preprocess(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
    let mut in_block = false;

    for i in 0..lines.len() {
        let line = lines[i].trim();

        if let Some(head) = line.strip_suffix('\\')
            && i + 1 < lines.len()
        {
            let joined = format!("{} {}", head.trim_end(), lines[i + 1].trim());
            lines[i + 1] = joined;
            lines[i].clear();
            continue;
        }

        let line = line.strip_suffix('\\').unwrap_or(line);
        let mut cleaned = strip_comments(line, &mut in_block);
        for marker in NOVTABLE {
            if cleaned.contains(marker) {
                cleaned = cleaned.replace(marker, "");
            }
        }
        lines[i] = collapse_whitespace(&cleaned);
    }

    lines
}

/// Removes `//` and `/* */` comments, tracking block comments across calls.
fn strip_comments(line: &str, in_block: &mut bool) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_block {
            match rest.find("*/") {
                Some(end) => {
                    *in_block = false;
                    rest = &rest[end + 2..];
                },
                None => return kept,
            }
        }

        let line_comment = rest.find("//");
        let block_comment = rest.find("/*");
        match (line_comment, block_comment) {
            (Some(l), Some(b)) if l < b => {
                kept.push_str(&rest[..l]);
                return kept;
            },
            (_, Some(b)) => {
                kept.push_str(&rest[..b]);
                *in_block = true;
                rest = &rest[b + 2..];
            },
            (Some(l), None) => {
                kept.push_str(&rest[..l]);
                return kept;
            },
            (None, None) => {
                kept.push_str(rest);
                return kept;
            },
        }
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a preprocessed line can hold (part of) a declaration.
#[must_use]
pub fn is_line_valid(line: &str, allow_braces: bool) -> bool {
    if line.is_empty() || SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return false;
    }
    allow_braces || !(line.starts_with('{') || line.starts_with('}'))
}

/// A position in the preprocessed lines of one header.
///
/// Parsing rules may consume lines past the one they started on; the cursor
/// then rests on the last line consumed.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: 0 }
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) const fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }

    pub(crate) fn current(&self) -> &'a str {
        self.lines.get(self.pos).map_or("", String::as_str)
    }

    pub(crate) const fn step(&mut self) {
        self.pos += 1;
    }

    /// Moves to the next valid line within [`SEARCH_WINDOW`] lines.
    pub(crate) fn advance_valid(&mut self, allow_braces: bool) -> Option<&'a str> {
        for _ in 0..SEARCH_WINDOW {
            self.pos += 1;
            let line = self.lines.get(self.pos)?;
            if is_line_valid(line, allow_braces) {
                return Some(line);
            }
        }
        None
    }

    /// The nearest valid line before `*index`, within [`SEARCH_WINDOW`] lines.
    pub(crate) fn previous_valid(&self, index: &mut usize) -> Option<&'a str> {
        for _ in 0..SEARCH_WINDOW {
            *index = index.checked_sub(1)?;
            let line = &self.lines[*index];
            if is_line_valid(line, false) {
                return Some(line);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_joins_into_next_line() {
        let lines = preprocess("DEFINE_GUID(IID_X, \\\n  0x1, 0x2, 0x3,\\\n 1,2,3,4,5,6,7,8);\nnext");
        assert_eq!(lines.len(), 4);
        assert!(lines[0].is_empty());
        assert!(lines[1].is_empty());
        assert_eq!(lines[2], "DEFINE_GUID(IID_X, 0x1, 0x2, 0x3, 1,2,3,4,5,6,7,8);");
        assert_eq!(lines[3], "next");
    }

    #[test]
    fn comments_are_removed() {
        let lines = preprocess(
            "int a; // trailing\n/* one\n two */ int b;\ntypedef /* [uuid] */ DECLSPEC_UUID(x) y;\n/* a */ c /* b */ // d",
        );
        assert_eq!(lines, ["int a;", "", "int b;", "typedef DECLSPEC_UUID(x) y;", "c"]);
    }

    #[test]
    fn url_inside_block_comment_does_not_reopen_it() {
        let lines = preprocess("/* see http://example */ MIDL_INTERFACE(x)");
        assert_eq!(lines, ["MIDL_INTERFACE(x)"]);
    }

    #[test]
    fn novtable_and_whitespace() {
        let lines = preprocess("struct\t__declspec(uuid(\"x\"))  __declspec(novtable)   IFoo");
        assert_eq!(lines, ["struct __declspec(uuid(\"x\")) IFoo"]);
        assert_eq!(preprocess("class DECLSPEC_NOVTABLE  IBar"), ["class IBar"]);
    }

    #[test]
    fn validity_rules() {
        assert!(!is_line_valid("", true));
        assert!(!is_line_valid("#if defined(X)", true));
        assert!(!is_line_valid("#endif // X", true));
        assert!(!is_line_valid("#define X 1", true));
        assert!(!is_line_valid("DEPRECATED(\"no\")", true));
        assert!(!is_line_valid("{ 0x1 }", false));
        assert!(is_line_valid("{ 0x1 }", true));
        assert!(is_line_valid("#ifdef X", false));
    }

    #[test]
    fn cursor_skips_invalid_lines_within_window() {
        let lines = preprocess("a\n\n#define X\n{\nb");
        let mut cursor = Cursor::new(&lines);
        assert_eq!(cursor.advance_valid(false), Some("b"));
        assert_eq!(cursor.pos(), 4);

        let lines = preprocess(&format!("a{}b", "\n".repeat(SEARCH_WINDOW + 1)));
        let mut cursor = Cursor::new(&lines);
        assert_eq!(cursor.advance_valid(false), None);
    }

    #[test]
    fn previous_valid_walks_backwards() {
        let lines = preprocess("namespace ABI {\n\n}\nx");
        let cursor = Cursor::new(&lines);
        let mut index = 3;
        assert_eq!(cursor.previous_valid(&mut index), Some("namespace ABI {"));
        assert_eq!(index, 0);
        assert_eq!(cursor.previous_valid(&mut index), None);
    }
}
