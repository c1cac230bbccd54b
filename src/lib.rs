#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tree;

extern crate regex;

/// A location in the input: the 1-based line number and the name of the
/// input it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn file(&self) -> &str {
        &self.1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}


/// Formats an error with the offending source line.
///
/// ```text
/// Error: SyntaxError (message)
/// -> program.txt
///   |
/// 3 | loop
///   | ^^^^
/// ```
pub fn render_error(error: &Error, file: &Path, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let line = error.get_position().line();
    let Some(line_text) = get_line(source, line) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let (line_text_removed, _) = remove_starting_whitespace(line_text);
    let line_text_removed = line_text_removed.trim_end();

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed));

    let carets = match error.get_token() {
        Some(token) if line_text_removed.contains(token.value.as_str()) => {
            let offset = line_text_removed.find(token.value.as_str()).unwrap_or(0);
            format!("{}{}", " ".repeat(offset), "^".repeat(token.value.len().max(1)))
        }
        _ => "^".repeat(line_text_removed.len().max(1)),
    };
    out.push_str(&format!("{:>padding$} {}\n", "|", carets));

    out
}

/// Prints an error with the offending source line.
pub fn display_error(error: &Error, file: &Path, source: &str) {
    print!("{}", render_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
