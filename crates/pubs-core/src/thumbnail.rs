//! Thumbnail path resolution
//!
//! Thumbnails live in one directory, named after the title slug. The first
//! existing file among the supported extensions wins; when none exists the
//! `.png` path is returned anyway so the page can be filled in later.

use std::path::{Path, PathBuf};

use crate::text::slugify;

/// Probed extensions, highest priority first
pub const THUMBNAIL_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

/// Resolves title slugs to thumbnail paths inside a fixed directory
#[derive(Debug, Clone)]
pub struct ThumbnailResolver {
    dir: PathBuf,
}

impl ThumbnailResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the thumbnail path for a title.
    ///
    /// Never fails; the only side effects are existence checks.
    pub fn resolve(&self, title: &str) -> String {
        let slug = slugify(title);

        for ext in THUMBNAIL_EXTENSIONS {
            let candidate = self.candidate(&slug, ext);
            if candidate.exists() {
                return to_forward_slashes(&candidate);
            }
        }

        tracing::debug!("No thumbnail for '{}', using {}.png", title, slug);
        to_forward_slashes(&self.candidate(&slug, THUMBNAIL_EXTENSIONS[0]))
    }

    fn candidate(&self, slug: &str, ext: &str) -> PathBuf {
        self.dir.join(format!("{}{}", slug, ext))
    }
}

/// Render a path with `/` separators on every platform.
fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_thumbnail_defaults_to_png() {
        let resolver = ThumbnailResolver::new("pub_thumbnails");
        assert_eq!(
            resolver.resolve("Fast Caching!!"),
            "pub_thumbnails/fast_caching.png"
        );
    }

    #[test]
    fn test_empty_title_uses_fallback_slug() {
        let resolver = ThumbnailResolver::new("thumbs");
        assert_eq!(resolver.resolve(""), "thumbs/publication.png");
    }

    #[test]
    fn test_existing_file_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fast_caching.webp"), b"").unwrap();

        let resolver = ThumbnailResolver::new(dir.path());
        let resolved = resolver.resolve("Fast Caching");
        assert!(resolved.ends_with("/fast_caching.webp"), "{}", resolved);
    }

    #[test]
    fn test_extension_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paper.jpeg"), b"").unwrap();
        fs::write(dir.path().join("paper.jpg"), b"").unwrap();
        fs::write(dir.path().join("paper.webp"), b"").unwrap();

        let resolver = ThumbnailResolver::new(dir.path());
        assert!(resolver.resolve("Paper").ends_with("/paper.jpg"));

        fs::write(dir.path().join("paper.png"), b"").unwrap();
        assert!(resolver.resolve("Paper").ends_with("/paper.png"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = ThumbnailResolver::new("pub_thumbnails");
        let first = resolver.resolve("Same Title");
        assert_eq!(first, resolver.resolve("Same Title"));
    }
}
