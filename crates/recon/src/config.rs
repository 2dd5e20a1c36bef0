use serde::Deserialize;

use crate::error::DedupeError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Run configuration. Every field has a default, so an empty TOML file
/// (or no config file at all) yields the built-in behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct DedupeConfig {
    /// Run label, echoed in the result meta block.
    #[serde(default = "default_name")]
    pub name: String,
    /// Key of the lead array inside the input document.
    #[serde(default = "default_array_key")]
    pub array_key: String,
    #[serde(default)]
    pub output: OutputConfig,
    /// Exit non-zero when any record was dropped without an audit trail.
    #[serde(default)]
    pub fail_on_drop: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input file stem for the deduplicated document.
    #[serde(default = "default_dupless_suffix")]
    pub dupless_suffix: String,
    /// Appended to the input file stem for the changelog report.
    #[serde(default = "default_changelog_suffix")]
    pub changelog_suffix: String,
}

fn default_name() -> String {
    "dedupe".into()
}

fn default_array_key() -> String {
    "leads".into()
}

fn default_dupless_suffix() -> String {
    "-dupless.json".into()
}

fn default_changelog_suffix() -> String {
    "-changelog.txt".into()
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            array_key: default_array_key(),
            output: OutputConfig::default(),
            fail_on_drop: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dupless_suffix: default_dupless_suffix(),
            changelog_suffix: default_changelog_suffix(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl DedupeConfig {
    pub fn from_toml(input: &str) -> Result<Self, DedupeError> {
        let config: DedupeConfig =
            toml::from_str(input).map_err(|e| DedupeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DedupeError> {
        if self.array_key.is_empty() {
            return Err(DedupeError::ConfigValidation(
                "array_key must not be empty".into(),
            ));
        }

        // A suffix that starts with anything else is appended directly to
        // the input stem and can collide with the input file itself.
        for (label, suffix) in [
            ("output.dupless_suffix", &self.output.dupless_suffix),
            ("output.changelog_suffix", &self.output.changelog_suffix),
        ] {
            if !suffix.starts_with('-') && !suffix.starts_with('.') {
                return Err(DedupeError::ConfigValidation(format!(
                    "{label} must start with '-' or '.', got \"{suffix}\""
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
