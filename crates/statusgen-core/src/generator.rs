//! Code generation for the declaration and dispatch regions.

use serde::{Deserialize, Serialize};

use crate::registry::StatusEntry;

/// Indentation applied to generated lines, in spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorStyle {
    /// Indent of each `NAME = 0x..` enumerator line.
    pub declaration_indent: usize,
    /// Indent of each `case NAME:` label.
    pub case_indent: usize,
    /// Indent of each `return "...";` line.
    pub return_indent: usize,
}

impl Default for GeneratorStyle {
    fn default() -> Self {
        Self {
            declaration_indent: 16,
            case_indent: 8,
            return_indent: 12,
        }
    }
}

impl GeneratorStyle {
    /// No indentation at all.
    pub fn flush() -> Self {
        Self {
            declaration_indent: 0,
            case_indent: 0,
            return_indent: 0,
        }
    }
}

/// The two fragments generated from one registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Enumerator lines for the declaration file.
    pub declarations: Vec<String>,
    /// `case`/`return` line pairs for the implementation file.
    pub dispatch: Vec<String>,
}

/// Generate both fragments from the entries, in the order given.
///
/// Every entry yields one enumerator line and one `case`/`return` pair.
/// All enumerator lines but the last end their value with a comma.
pub fn generate(entries: &[StatusEntry], style: &GeneratorStyle) -> GeneratedCode {
    let mut code = GeneratedCode {
        declarations: Vec::with_capacity(entries.len()),
        dispatch: Vec::with_capacity(entries.len() * 2),
    };

    for (index, entry) in entries.iter().enumerate() {
        let comma = if index + 1 < entries.len() { "," } else { "" };
        code.declarations.push(format!(
            "{:indent$}{} = {:#x}{}  // {}\n",
            "",
            entry.name,
            entry.code,
            comma,
            entry.description,
            indent = style.declaration_indent
        ));
        code.dispatch.push(format!(
            "{:indent$}case {}:\n",
            "",
            entry.name,
            indent = style.case_indent
        ));
        code.dispatch.push(format!(
            "{:indent$}return \"{}\";\n",
            "",
            escape_quotes(&entry.description),
            indent = style.return_indent
        ));
    }

    code
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
