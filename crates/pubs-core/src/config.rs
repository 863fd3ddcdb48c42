//! Configuration for the generators
//!
//! Every value has a default matching the fixed layout of the site
//! repository, so the binaries run with no configuration at all.
//! A TOML file can override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PubsError, PubsResult};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PubsConfig {
    /// Author whose name is emphasized in LaTeX and HTML output
    pub highlight_author: Option<String>,
    /// Input and output locations
    pub paths: PathsConfig,
    /// LaTeX section headings
    pub latex: LatexConfig,
    /// HTML rendering switches
    pub html: HtmlConfig,
}

impl Default for PubsConfig {
    fn default() -> Self {
        Self {
            highlight_author: Some("Minh Tran".to_string()),
            paths: PathsConfig::default(),
            latex: LatexConfig::default(),
            html: HtmlConfig::default(),
        }
    }
}

/// File locations, relative to the working directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub json_output: PathBuf,
    pub latex_output: PathBuf,
    pub selected_latex_output: PathBuf,
    pub html_output: PathBuf,
    pub thumbnail_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/all_pubs.csv"),
            json_output: PathBuf::from("publications.json"),
            latex_output: PathBuf::from("data/pubs_latex.txt"),
            selected_latex_output: PathBuf::from("data/selected_pubs_latex.txt"),
            html_output: PathBuf::from("data/selected_pubs.html"),
            thumbnail_dir: PathBuf::from("pub_thumbnails"),
        }
    }
}

/// Headings for the two LaTeX fragments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatexConfig {
    /// Heading text of the full publication list
    pub full_heading: String,
    /// Heading text of the selected publication list
    pub selected_heading: String,
    /// Target of the "Full List" link next to the selected heading
    pub full_list_url: String,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            full_heading: "Publications".to_string(),
            selected_heading: "Selected Publications".to_string(),
            full_list_url: "https://scholar.google.com/citations?user=AmQwXDUAAAAJ".to_string(),
        }
    }
}

/// HTML rendering switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Append each record's BibTeX citation to its block
    pub embed_bibtex: bool,
}

impl PubsConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> PubsResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> PubsResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| PubsError::io(path, e))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Self::from_toml(&contents)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> PubsResult<()> {
        let paths = [
            ("paths.input", &self.paths.input),
            ("paths.json_output", &self.paths.json_output),
            ("paths.latex_output", &self.paths.latex_output),
            ("paths.selected_latex_output", &self.paths.selected_latex_output),
            ("paths.html_output", &self.paths.html_output),
            ("paths.thumbnail_dir", &self.paths.thumbnail_dir),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(PubsError::Config(format!("{} must not be empty", name)));
            }
        }

        if self.paths.latex_output == self.paths.selected_latex_output {
            return Err(PubsError::Config(
                "latex_output and selected_latex_output must differ".to_string(),
            ));
        }

        if matches!(&self.highlight_author, Some(name) if name.trim().is_empty()) {
            return Err(PubsError::Config(
                "highlight_author must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PubsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paths.input, PathBuf::from("data/all_pubs.csv"));
        assert_eq!(config.highlight_author.as_deref(), Some("Minh Tran"));
        assert!(!config.html.embed_bibtex);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PubsConfig::from_toml(
            r#"
            highlight_author = "Sam Lee"

            [paths]
            input = "pubs.csv"

            [html]
            embed_bibtex = true
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.input, PathBuf::from("pubs.csv"));
        assert_eq!(config.paths.thumbnail_dir, PathBuf::from("pub_thumbnails"));
        assert_eq!(config.highlight_author.as_deref(), Some("Sam Lee"));
        assert!(config.html.embed_bibtex);
        assert_eq!(config.latex.full_heading, "Publications");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PubsConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = PubsConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.paths.html_output, config.paths.html_output);
        assert_eq!(parsed.latex.full_list_url, config.latex.full_list_url);
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut config = PubsConfig::default();
        config.paths.input = PathBuf::new();
        assert!(matches!(config.validate(), Err(PubsError::Config(_))));
    }

    #[test]
    fn test_same_latex_outputs_rejected() {
        let mut config = PubsConfig::default();
        config.paths.selected_latex_output = config.paths.latex_output.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = PubsConfig::from_toml("paths = 3");
        assert!(matches!(result, Err(PubsError::ConfigParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PubsConfig::load("/nonexistent/pubs.toml");
        assert!(matches!(result, Err(PubsError::Io { .. })));
    }
}
