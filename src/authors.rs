//! Cargo authors-field parsing
//!
//! Cargo keeps authorship as a single `Name <email>` string per entry,
//! with multiple entries joined by `:`. This module splits the convention
//! into separate name and email parts so the manifest and the descriptor
//! constants can be cross-checked.

use std::fmt;

/// One entry from a Cargo `authors` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Display name
    pub name: String,

    /// Contact address, when the entry carries a `<...>` suffix
    pub email: Option<String>,
}

impl Author {
    /// Parse a single `Name <email>` entry
    ///
    /// Entries without a well-formed `<...>` suffix yield an email-less
    /// author; empty or whitespace-only entries yield `None`.
    pub fn parse(entry: &str) -> Option<Author> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }

        if let Some((name, rest)) = entry.split_once('<') {
            if let Some(email) = rest.strip_suffix('>') {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let email = email.trim();
                return Some(Author {
                    name: name.to_string(),
                    email: (!email.is_empty()).then(|| email.to_string()),
                });
            }
        }

        Some(Author {
            name: entry.to_string(),
            email: None,
        })
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.name, email),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Parse a full Cargo `authors` field (entries joined by `:`)
pub fn parse_authors_field(raw: &str) -> Vec<Author> {
    raw.split(':').filter_map(Author::parse).collect()
}

/// The authors of this crate, from the Cargo manifest
pub fn crate_authors() -> Vec<Author> {
    parse_authors_field(env!("CARGO_PKG_AUTHORS"))
}
