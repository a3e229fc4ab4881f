use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

/// Options for the [`AppShell`](crate::shell::AppShell) and the styles it registers.
///
/// ## Examples
/// Default values:
/// ```rust
/// use vitrine::{ShellOptions, shell::AppShell};
///
/// let shell = AppShell::with_options(ShellOptions::default()).unwrap();
/// ```
/// Custom values:
/// ```rust
/// use vitrine::ShellOptions;
///
/// let options = ShellOptions {
///     max_width: 960,
///     font_family: "Georgia, serif".into(),
///     highlight_theme: "base16-ocean.dark".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShellOptions {
    /// Maximum width of the article container, in CSS pixels.
    pub max_width: u32,
    /// CSS `margin` of the article container, `0 auto` centers it horizontally.
    pub margin: String,
    /// CSS `font-family` of the article container.
    pub font_family: String,

    /// Site-wide stylesheet, relative to the directory the site is built from.
    pub global_stylesheet: PathBuf,
    /// Name of the syntect theme used to generate the code presentation stylesheet.
    ///
    /// Must be one of syntect's default themes, e.g. `InspiredGitHub`, `Solarized (light)` or `base16-ocean.dark`.
    pub highlight_theme: String,
    /// Where generated stylesheets are written before being handed to Maudit.
    pub generated_styles_dir: PathBuf,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            max_width: 768,
            margin: "0 auto".to_string(),
            font_family: "sans-serif".to_string(),
            global_stylesheet: "assets/global.css".into(),
            highlight_theme: "InspiredGitHub".to_string(),
            generated_styles_dir: "target/vitrine".into(),
        }
    }
}

impl ShellOptions {
    /// Parse options from YAML. Omitted fields keep their default value.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_str(&source)
    }

    /// Load options from the file pointed at by `VITRINE_CONFIG`, or use the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os("VITRINE_CONFIG") {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Inline `style` attribute of the article container.
    pub fn container_style(&self) -> String {
        format!(
            "max-width: {}px; margin: {}; font-family: {}",
            self.max_width, self.margin, self.font_family
        )
    }
}
