//! Converter configuration.

use serde::{Deserialize, Serialize};

use crate::error::ScoreResult;

/// Options controlling how a [`Converter`](crate::Converter) reads and writes scores.
///
/// Options can be built in code or loaded from TOML. Missing keys take their
/// defaults.
///
/// # TOML Format
///
/// ```toml
/// pretty = true
/// check_references = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Emit indented JSON instead of the compact form.
    pub pretty: bool,

    /// Reject graphs whose edges reference missing nodes or whose node ids
    /// repeat, both when decoding and when encoding.
    pub check_references: bool,
}

impl ConverterOptions {
    /// Options with every check disabled and compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pretty printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable reference checking.
    pub fn with_reference_checks(mut self, check: bool) -> Self {
        self.check_references = check;
        self
    }

    /// Load options from a TOML string.
    pub fn from_toml(toml_str: &str) -> ScoreResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the options to a TOML string.
    pub fn to_toml(&self) -> ScoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
