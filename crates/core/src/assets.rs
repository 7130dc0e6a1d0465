//! Static asset allow-list.

/// File name suffixes that may be served from the assets directory.
const SERVABLE_EXTENSIONS: &[&str] = &[".js", ".css", ".png", ".map.js"];

/// Returns the base name of `path` if it names a servable asset.
///
/// Only the final path segment is considered, so `/a/b/app.js` resolves to
/// `app.js`. The extension check is case-insensitive.
pub fn servable_asset_name(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let lower = name.to_ascii_lowercase();

    SERVABLE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
        .then_some(name)
}

/// Content type for a servable asset name.
pub fn content_type(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".js") {
        "application/javascript; charset=utf-8"
    } else if lower.ends_with(".css") {
        "text/css; charset=utf-8"
    } else if lower.ends_with(".png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_listed_extensions() {
        assert_eq!(servable_asset_name("/app.js"), Some("app.js"));
        assert_eq!(servable_asset_name("/style.CSS"), Some("style.CSS"));
        assert_eq!(servable_asset_name("/logo.png"), Some("logo.png"));
        assert_eq!(servable_asset_name("/app.map.js"), Some("app.map.js"));
    }

    #[test]
    fn uses_only_the_base_name() {
        assert_eq!(servable_asset_name("/nested/dir/app.js"), Some("app.js"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(servable_asset_name("/x.exe"), None);
        assert_eq!(servable_asset_name("/index.html"), None);
        assert_eq!(servable_asset_name("/"), None);
        assert_eq!(servable_asset_name("/js"), None);
    }

    #[test]
    fn content_type_matches_extension() {
        assert_eq!(content_type("app.js"), "application/javascript; charset=utf-8");
        assert_eq!(content_type("app.map.js"), "application/javascript; charset=utf-8");
        assert_eq!(content_type("style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("LOGO.PNG"), "image/png");
    }
}
