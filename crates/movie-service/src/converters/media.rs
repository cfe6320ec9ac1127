//! Image path resolution shared by the avatar and poster conversions

/// Path a client should load for a stored file name
pub fn resolve(prefix: &str, default: &str, file: Option<&str>) -> String {
    match file.filter(|f| !f.is_empty()) {
        Some(file) => format!("{}/{file}", prefix.trim_end_matches('/')),
        None => default.to_string(),
    }
}

/// File name to store for a submitted path.
///
/// The default image is stored as `None`; any other path keeps only the part
/// after its last `/`.
pub fn file_name(default: &str, path: Option<&str>) -> Option<String> {
    let path = path?;
    if path == default {
        return None;
    }
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
