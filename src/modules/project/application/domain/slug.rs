// src/modules/project/application/domain/slug.rs
use regex::Regex;
use std::sync::OnceLock;

/// Turn a project title into a URL-safe slug.
///
/// Lowercases, drops anything that is not an ASCII word character, whitespace
/// or hyphen, collapses runs of whitespace/underscore/hyphen into a single
/// hyphen, then trims hyphens from both ends. Applying it to its own output
/// returns the same string.
pub fn derive_slug(title: &str) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    static EDGE_HYPHENS: OnceLock<Regex> = OnceLock::new();

    let disallowed = DISALLOWED.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_\s-]").unwrap());
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[\s_-]+").unwrap());
    let edge_hyphens = EDGE_HYPHENS.get_or_init(|| Regex::new(r"^-+|-+$").unwrap());

    let lowered = title.to_lowercase();
    let stripped = disallowed.replace_all(&lowered, "");
    let hyphenated = separators.replace_all(&stripped, "-");
    edge_hyphens.replace_all(&hyphenated, "").into_owned()
}
