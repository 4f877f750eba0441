//! Export surface of the package.
//!
//! The exported-name list is modeled as an enum so that every name in the
//! surface maps to a real descriptor attribute at compile time; a dangling
//! export name cannot be expressed.

use std::str::FromStr;

use thiserror::Error;

use crate::descriptor::PackageDescriptor;

/// Number of exported attributes.
pub const EXPORT_COUNT: usize = 3;

/// Exported attribute names, in export order.
pub const EXPORTED_NAMES: [&str; EXPORT_COUNT] = [
    ExportedName::Version.as_str(),
    ExportedName::Author.as_str(),
    ExportedName::Email.as_str(),
];

/// An attribute declared part of the package's public export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportedName {
    /// The package version string.
    Version,
    /// The author display name.
    Author,
    /// The author contact address.
    Email,
}

/// Error returned when a name is not part of the export surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an exported attribute: {0}")]
pub struct UnknownExport(pub String);

impl ExportedName {
    /// All exported names, in export order.
    pub const ALL: [ExportedName; EXPORT_COUNT] =
        [ExportedName::Version, ExportedName::Author, ExportedName::Email];

    /// The name importers use to refer to this attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Author => "author",
            Self::Email => "email",
        }
    }

    /// Read the attribute this name refers to.
    ///
    /// The match is exhaustive: declaring an exported name without a
    /// backing descriptor attribute fails to compile.
    pub const fn resolve(self, descriptor: &PackageDescriptor) -> &'static str {
        match self {
            Self::Version => descriptor.version(),
            Self::Author => descriptor.author(),
            Self::Email => descriptor.email(),
        }
    }
}

impl FromStr for ExportedName {
    type Err = UnknownExport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "version" => Ok(Self::Version),
            "author" => Ok(Self::Author),
            "email" => Ok(Self::Email),
            other => Err(UnknownExport(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
