//! Image URL derivation.

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Pick the single image URL to render.
///
/// An absolute override always wins. A stored path that is already an
/// absolute `http(s)` URL is returned as-is; any other path is joined onto
/// `backend_base`. Empty strings count as absent.
pub fn resolve_image_url(
    relative: Option<&str>,
    absolute: Option<&str>,
    backend_base: &str,
) -> Option<String> {
    if let Some(url) = present(absolute) {
        return Some(url.to_string());
    }

    let path = present(relative)?;
    if path.starts_with("http://") || path.starts_with("https://") {
        Some(path.to_string())
    } else {
        Some(format!("{backend_base}{path}"))
    }
}
