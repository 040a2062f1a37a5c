//! Page-level configuration read from the host document.
//!
//! The page may carry a JSON object in the `data-fx-config` attribute on
//! `<body>`. Every field is optional; anything left out falls back to the
//! defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FxError;

pub const DEFAULT_ELEVATION_OFFSET: f64 = 8.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_RECIPIENT_LABEL: &str = "Azka";
pub const DEFAULT_SUBJECT_PREFIX: &str = "Portfolio enquiry";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    /// Scroll offset (CSS px) past which the header is elevated.
    pub elevation_offset: f64,
    /// Fraction of an element's area that must be visible before it reveals.
    pub reveal_threshold: f64,
    /// Name used in the greeting line of the composed email.
    pub recipient_label: String,
    /// Leading text of the composed email subject.
    pub subject_prefix: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            elevation_offset: DEFAULT_ELEVATION_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            recipient_label: DEFAULT_RECIPIENT_LABEL.to_owned(),
            subject_prefix: DEFAULT_SUBJECT_PREFIX.to_owned(),
        }
    }
}

impl FxConfig {
    /// Parse a config object from the raw attribute value.
    ///
    /// `None` or a blank string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] when the value is not a JSON object with the
    /// expected field types.
    pub fn from_json(raw: Option<&str>) -> Result<Self, FxError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal_threshold = normalize_threshold(config.reveal_threshold);
        Ok(config)
    }

    /// Read the config from `<body data-fx-config>`.
    ///
    /// # Errors
    ///
    /// Propagates [`FxError::Config`] from [`FxConfig::from_json`].
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Result<Self, FxError> {
        let raw = document
            .body()
            .and_then(|body| body.get_attribute(crate::consts::CONFIG_ATTR));
        Self::from_json(raw.as_deref())
    }
}

fn normalize_threshold(raw: f64) -> f64 {
    if raw.is_finite() { raw.clamp(0.0, 1.0) } else { DEFAULT_REVEAL_THRESHOLD }
}
