//! Attachment kind names.
//!
//! Each kind of metadata is attached to program values under its own name.
//! The defaults work out of the box; tools that share a module with other
//! annotators can rename them, in code or from a JSON file.

use serde::Deserialize;

use crate::error::ConfigError;

/// Names of the attachment kinds the model reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttachmentConfig {
    /// Kind for scalar info nodes.
    pub(crate) info_kind: String,
    /// Kind for aggregate info nodes.
    pub(crate) struct_info_kind: String,
    /// Kind for comparison error nodes.
    pub(crate) cmp_error_kind: String,
    /// Kind for initial weight nodes.
    pub(crate) init_weight_kind: String,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            info_kind: "fixmeta.info".into(),
            struct_info_kind: "fixmeta.structinfo".into(),
            cmp_error_kind: "fixmeta.cmperr".into(),
            init_weight_kind: "fixmeta.initweight".into(),
        }
    }
}

impl AttachmentConfig {
    /// Create a new config with the default kind names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON. Missing keys keep their defaults.
    ///
    /// ```
    /// use fixmeta_model::AttachmentConfig;
    /// let config = AttachmentConfig::from_json(r#"{ "info_kind": "my.info" }"#).unwrap();
    /// assert_eq!(config.info_kind(), "my.info");
    /// assert_eq!(config.struct_info_kind(), "fixmeta.structinfo");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every kind is named and no two kinds share a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let kinds = self.kinds();
        if kinds.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::EmptyKind);
        }
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[i + 1..].contains(kind) {
                return Err(ConfigError::DuplicateKind((*kind).to_owned()));
            }
        }
        Ok(())
    }

    /// Set the scalar info kind name.
    pub fn info(mut self, name: impl Into<String>) -> Self {
        self.info_kind = name.into();
        self
    }

    /// Set the aggregate info kind name.
    pub fn struct_info(mut self, name: impl Into<String>) -> Self {
        self.struct_info_kind = name.into();
        self
    }

    /// Set the comparison error kind name.
    pub fn cmp_error(mut self, name: impl Into<String>) -> Self {
        self.cmp_error_kind = name.into();
        self
    }

    /// Set the initial weight kind name.
    pub fn init_weight(mut self, name: impl Into<String>) -> Self {
        self.init_weight_kind = name.into();
        self
    }

    pub fn info_kind(&self) -> &str {
        &self.info_kind
    }

    pub fn struct_info_kind(&self) -> &str {
        &self.struct_info_kind
    }

    pub fn cmp_error_kind(&self) -> &str {
        &self.cmp_error_kind
    }

    pub fn init_weight_kind(&self) -> &str {
        &self.init_weight_kind
    }

    fn kinds(&self) -> [&str; 4] {
        [
            &self.info_kind,
            &self.struct_info_kind,
            &self.cmp_error_kind,
            &self.init_weight_kind,
        ]
    }
}
