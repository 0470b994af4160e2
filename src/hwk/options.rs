//! Knobs for the generated Lua.
//!
//! The defaults produce the code the hawck runtime expects. The `[transpile]` table of
//! the configuration file deserializes straight into [TranspileOptions].

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranspileOptions {
    /// Name of the match table, also the parameter of every match scope closure.
    pub match_table: String,
    /// Expression called with the closure of a braced action.
    pub scope_constructor: String,
    /// Treat end of input inside a long comment or string as an error.
    pub reject_unterminated: bool,
}

impl TranspileOptions {
    /// `__match[` + pattern + `] =`, with the indentation kept in front.
    pub(crate) fn match_assignment(&self, indent: &str, pattern: &str) -> String {
        format!("{indent}{}[{pattern}] =", self.match_table)
    }

    /// Replacement for the `{` of a match block.
    pub(crate) fn scope_open(&self) -> String {
        format!(
            "{}(function ({})",
            self.scope_constructor, self.match_table
        )
    }
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            match_table: "__match".to_string(),
            scope_constructor: "MatchScope.new".to_string(),
            reject_unterminated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shapes() {
        let options = TranspileOptions::default();
        assert_eq!(options.match_assignment("  ", "key \"a\""), "  __match[key \"a\"] =");
        assert_eq!(options.scope_open(), "MatchScope.new(function (__match)");
    }
}
