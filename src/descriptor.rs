//! Package descriptor - version and authorship metadata
//!
//! The descriptor is one immutable struct, constructed once at program
//! load time and exposed by reference for the lifetime of the process.

use serde::Serialize;

use crate::exports::{ExportedName, EXPORTED_NAMES, EXPORT_COUNT};

/// Package version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author display name.
pub const AUTHOR: &str = "Igor Lessio";

/// Author contact address.
pub const EMAIL: &str = "ilessio.aimaster@gmail.com";

/// Metadata identifying the package and its public export surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    /// Semantic-version string (dotted numeric triple by convention)
    version: &'static str,

    /// Author display name
    author: &'static str,

    /// Author contact address
    email: &'static str,

    /// Attribute names declared public, in export order
    exported_names: [&'static str; EXPORT_COUNT],
}

/// The single process-wide descriptor instance.
static DESCRIPTOR: PackageDescriptor = PackageDescriptor {
    version: VERSION,
    author: AUTHOR,
    email: EMAIL,
    exported_names: EXPORTED_NAMES,
};

/// Get the process-wide package descriptor
pub const fn descriptor() -> &'static PackageDescriptor {
    &DESCRIPTOR
}

impl PackageDescriptor {
    /// The package version string
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// The author display name
    pub const fn author(&self) -> &'static str {
        self.author
    }

    /// The author contact address
    pub const fn email(&self) -> &'static str {
        self.email
    }

    /// The exported attribute names, in export order
    pub const fn exported_names(&self) -> &[&'static str; EXPORT_COUNT] {
        &self.exported_names
    }

    /// Look up an attribute value by exported name
    ///
    /// Returns `None` for names outside the export surface; the lookup
    /// never panics. Matching is exact and case-sensitive.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let entry: ExportedName = name.parse().ok()?;
        Some(entry.resolve(self))
    }
}
