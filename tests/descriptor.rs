//! Consumer-view test of the re-exported metadata surface.

use cursor_rules::{crate_authors, descriptor, ExportedName, AUTHOR, EMAIL, EXPORTED_NAMES, VERSION};

#[test]
fn metadata_values() {
    let meta = descriptor();
    assert_eq!(meta.version(), "0.1.0");
    assert_eq!(meta.author(), "Igor Lessio");
    assert_eq!(meta.email(), "ilessio.aimaster@gmail.com");
    assert_eq!(meta.version(), VERSION);
    assert_eq!(meta.author(), AUTHOR);
    assert_eq!(meta.email(), EMAIL);
}

#[test]
fn export_surface_order() {
    assert_eq!(EXPORTED_NAMES, ["version", "author", "email"]);
    assert_eq!(descriptor().exported_names(), &EXPORTED_NAMES);
}

#[test]
fn dynamic_lookup_agrees_with_accessors() {
    let meta = descriptor();
    for name in EXPORTED_NAMES {
        let entry: ExportedName = name.parse().expect("declared name must parse");
        assert_eq!(meta.get(name), Some(entry.resolve(meta)));
    }
    assert_eq!(meta.get("__all__"), None);
}

#[test]
fn repeated_access_is_idempotent() {
    let first = descriptor();
    let second = descriptor();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.version(), second.version());
    assert_eq!(first.author(), second.author());
    assert_eq!(first.email(), second.email());
    assert_eq!(first.exported_names(), second.exported_names());
}

#[test]
fn serializes_as_four_field_object() {
    let value = serde_json::to_value(descriptor()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "version": "0.1.0",
            "author": "Igor Lessio",
            "email": "ilessio.aimaster@gmail.com",
            "exported_names": ["version", "author", "email"],
        })
    );
}

#[test]
fn manifest_authors_match_descriptor() {
    let authors = crate_authors();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].name, AUTHOR);
    assert_eq!(authors[0].email.as_deref(), Some(EMAIL));
}

#[test]
fn version_is_semver() {
    let parsed = semver::Version::parse(VERSION).expect("version must be semver");
    assert_eq!(parsed.to_string(), VERSION);
    assert!(parsed.pre.is_empty());
    assert!(parsed.build.is_empty());
}
