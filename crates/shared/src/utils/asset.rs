/// Joins a relative asset path onto the image host; absolute URLs pass through.
pub fn resolve_image_url(image_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty()
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("data:")
    {
        return path.to_string();
    }

    format!(
        "{}/{}",
        image_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
