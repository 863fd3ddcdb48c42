//! Test fixture loading utilities

use std::path::{Path, PathBuf};

use pubs_core::PubsConfig;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Configuration reading the sample sheet and writing everything under `out_dir`
#[allow(dead_code)]
pub fn fixture_config(out_dir: &Path) -> PubsConfig {
    let mut config = PubsConfig::default();
    config.paths.input = fixture_path("all_pubs.csv");
    config.paths.json_output = out_dir.join("publications.json");
    config.paths.latex_output = out_dir.join("data/pubs_latex.txt");
    config.paths.selected_latex_output = out_dir.join("data/selected_pubs_latex.txt");
    config.paths.html_output = out_dir.join("data/selected_pubs.html");
    config.paths.thumbnail_dir = out_dir.join("pub_thumbnails");
    config
}
