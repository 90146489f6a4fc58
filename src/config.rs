use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CookConfig {
    /// Settings copied onto every parsed recipe and honoured by renderers
    #[serde(default)]
    pub render: RecipeSettings,
    /// Parser strictness switches
    #[serde(default)]
    pub parser: ParserOptions,
    /// File loading behaviour
    #[serde(default)]
    pub loader: LoaderOptions,
}

/// Settings that affect how a parsed recipe is rendered.
///
/// The defaults follow the Cooklang conventions but can be overridden
/// per recipe.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RecipeSettings {
    /// Render every section heading at one fixed level, regardless of the
    /// number of `=` markers in the source
    #[serde(default = "default_true")]
    pub ignore_section_depth: bool,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        Self {
            ignore_section_depth: true,
        }
    }
}

/// Strictness switches for the parser
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Reject timers that carry no duration
    #[serde(default)]
    pub strict_timers: bool,
    /// Reject units outside the recognised vocabulary and normalise the rest
    #[serde(default)]
    pub strict_units: bool,
}

/// Options for reading recipes from disk
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Derive a title from the file name when the front matter has none
    #[serde(default = "default_true")]
    pub infer_title: bool,
    /// Look for a sibling image with the same stem
    #[serde(default = "default_true")]
    pub search_image: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            infer_title: true,
            search_image: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl CookConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKLANG__ prefix
    /// 2. cooklang.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKLANG__RENDER__IGNORE_SECTION_DEPTH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`CookConfig::load`] for the source priority.
pub fn load_config() -> Result<CookConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cooklang").required(false))
        // Use double underscore for nested: COOKLANG__PARSER__STRICT_TIMERS
        .add_source(
            Environment::with_prefix("COOKLANG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
