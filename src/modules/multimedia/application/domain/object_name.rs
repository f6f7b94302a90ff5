// src/modules/multimedia/application/domain/object_name.rs
use chrono::Utc;
use rand::Rng;
use std::path::Path;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Lowercased extension of a file name. Only ASCII letters and digits count;
/// an extension with anything else is dropped.
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|s| s.to_ascii_lowercase())
}

/// Fresh object name: `<unix-millis>-<base36 suffix>.<ext>`.
///
/// Names without an extension get no trailing dot. No collision check is
/// made; the timestamp plus suffix is treated as unique enough.
pub fn generate_object_name(original_file_name: &str) -> String {
    object_name_with(
        Utc::now().timestamp_millis(),
        &random_suffix(),
        original_file_name,
    )
}

fn object_name_with(millis: i64, suffix: &str, original_file_name: &str) -> String {
    match extension_of(original_file_name) {
        Some(ext) => format!("{}-{}.{}", millis, suffix, ext),
        None => format!("{}-{}", millis, suffix),
    }
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Object name addressed by a public URL: its last path segment.
///
/// Query strings and fragments are ignored. Returns `None` when the last
/// segment is empty (for example a URL ending in `/`).
pub fn object_name_from_url(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let path = without_fragment.split('?').next().unwrap_or(without_fragment);

    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
