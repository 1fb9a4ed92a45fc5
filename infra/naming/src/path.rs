use crate::error::NamingError;

/// Splits a slash-separated name into its components.
///
/// Empty components are ignored, so `""`, `"/"` and `"a//b/"` are all valid.
/// Relative components (`.` and `..`) are rejected: names are opaque.
pub(crate) fn components(path: &str) -> Result<Vec<&str>, NamingError> {
    let mut out = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." {
            return Err(NamingError::NotFound {
                message: path.to_owned().into(),
                context: Some("Relative name components are not supported".into()),
            });
        }
        out.push(segment);
    }
    Ok(out)
}

/// Joins a child name onto a traversal root as `root + "/" + name`.
///
/// A single trailing `/` on `root` is dropped first, so `"/a/"` and `"/a"` yield the
/// same child paths and the registry root (`""` or `"/"`) yields `"/name"`.
/// Unlike plain `root + "/" + name`, a root of `"/"` never produces `"//name"`.
#[must_use]
pub fn child_path(root: &str, name: &str) -> String {
    let root = root.strip_suffix('/').unwrap_or(root);
    let mut path = String::with_capacity(root.len() + name.len() + 1);
    path.push_str(root);
    path.push('/');
    path.push_str(name);
    path
}
