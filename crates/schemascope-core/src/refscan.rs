use regex::Regex;

use crate::schema::Table;

/// Table-name-in-text matcher used to associate views and routines with the
/// tables their definitions mention.
///
/// The pattern is an optional `schema-qualifier.` prefix followed by the bare
/// table name, either side optionally `[bracket]`-quoted, case-insensitive.
/// This is deliberately a textual heuristic, not SQL parsing: a name inside a
/// comment or string literal still counts.
#[derive(Debug)]
pub(crate) struct ReferencePattern {
    // Always `Some` in practice; the escaped table name cannot produce an
    // invalid pattern.
    regex: Option<Regex>,
    schema: String,
}

impl ReferencePattern {
    pub(crate) fn for_table(table: &Table) -> Self {
        let pattern = format!(
            r"(?i)(?:(\[?[^\s]*\]?)\.)?\[?{}\]?",
            regex::escape(table.name())
        );
        Self {
            regex: Regex::new(&pattern).ok(),
            schema: table.schema().to_string(),
        }
    }

    /// True when `definition` contains at least one qualifying occurrence.
    ///
    /// A qualified occurrence counts only when its qualifier (brackets
    /// stripped, trimmed) equals the table's schema case-insensitively; an
    /// unqualified occurrence always counts.
    pub(crate) fn matches(&self, definition: &str) -> bool {
        let Some(regex) = &self.regex else {
            return false;
        };
        for captures in regex.captures_iter(definition) {
            match captures.get(1) {
                Some(qualifier) => {
                    let cleaned = qualifier.as_str().replace(['[', ']'], "");
                    if cleaned.trim().eq_ignore_ascii_case(&self.schema) {
                        return true;
                    }
                }
                None => return true,
            }
        }
        false
    }
}
