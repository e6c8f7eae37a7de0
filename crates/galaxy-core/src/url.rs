//! Root-relative URL resolution

/// Resolve `path` against the application root path.
///
/// Paths starting with `/` are mounted under `root` (`/galaxy/` turns
/// `/static/favicon.png` into `/galaxy/static/favicon.png`). Absolute URLs
/// and relative paths are returned unchanged.
pub fn url_for(root: &str, path: &str) -> String {
    if !path.starts_with('/') || path.starts_with("//") {
        return path.to_string();
    }

    let root = root.trim_end_matches('/');
    format!("{}{}", root, path)
}
