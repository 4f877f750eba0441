//! cursor-rules library
//!
//! Package metadata for the Cursor Rules Collection: a version string,
//! authorship details, and the explicit list of attribute names that make
//! up the public export surface.
//!
//! The metadata lives in one immutable [`PackageDescriptor`], constructed
//! at program load and exposed by reference via [`descriptor`]. The export
//! surface is a statically checked symbol table ([`ExportedName`]), so a
//! declared name without a backing attribute is a compile-time error
//! rather than a runtime lookup failure.

pub mod authors;
pub mod descriptor;
pub mod exports;

// Re-exports for library consumers
pub use authors::{crate_authors, Author};
pub use descriptor::{descriptor, PackageDescriptor, AUTHOR, EMAIL, VERSION};
pub use exports::{ExportedName, UnknownExport, EXPORTED_NAMES};
