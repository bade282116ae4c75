//! Checks on the packaging metadata shipped with the binary.

const CARGO_TOML: &str = include_str!("../Cargo.toml");

#[test]
fn release_profile_is_size_optimized() {
    for setting in ["lto = true", "strip = true", "codegen-units = 1"] {
        assert!(
            CARGO_TOML.contains(setting),
            "release profile must set `{}`",
            setting
        );
    }
}

#[test]
fn libc_is_unix_only() {
    assert!(
        CARGO_TOML.contains("[target.'cfg(unix)'.dependencies]"),
        "geteuid support must stay behind cfg(unix)"
    );
}
