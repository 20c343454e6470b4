//! Configuration for the MinElev document engine
//!
//! Two kinds of configuration live here:
//! - Compile-time constants for business limits and resource guards
//! - [`EngineConfig`], read from the environment at startup, which decides
//!   which document types the registry exposes
//!
//! # Environment
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `YFF_ENABLED` | `true` | register the `yff-*` document types |
//! | `FAGSKOLEN_ENABLED` | `true` | register `fagskolen-forhandsvarsel` |
//! | `YFF_LAEREPLAN_VARIANT` | `plan` | content shape of `yff-laereplan` (`note` or `plan`) |

use crate::error::{DocumentError, Result};

/// Maximum length of a fagskolen assignment description, after trimming.
pub const MAX_ASSIGNMENT_LENGTH: usize = 200;

/// Norwegian organisation numbers are exactly nine digits.
pub const ORGANIZATION_NUMBER_LENGTH: usize = 9;

/// Norwegian mobile numbers have eight digits once the country prefix is gone.
pub const MOBILE_NUMBER_DIGITS: usize = 8;

/// The school year rolls over after this (month, day).
pub const SCHOOL_YEAR_ROLLOVER: (u32, u32) = (7, 15);

/// Delimiter between the two years of a school-year label.
pub const DEFAULT_YEAR_DELIMITER: &str = "/";

/// Maximum number of items accepted in any list of raw content.
///
/// Id lists, contact persons and competence goals are all short in practice;
/// this bounds the work a single request can cause.
pub const MAX_ARRAY_ITEMS: usize = 200;

/// Maximum nesting depth the structural validator descends into.
pub const MAX_SCHEMA_DEPTH: usize = 32;

/// Content shape used by the `yff-laereplan` document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LaereplanVariant {
    /// Free-text note
    Note,
    /// Placement with a non-empty list of competence goals
    #[default]
    Plan,
}

impl LaereplanVariant {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "note" => Ok(LaereplanVariant::Note),
            "plan" => Ok(LaereplanVariant::Plan),
            other => Err(DocumentError::Config(format!(
                "YFF_LAEREPLAN_VARIANT must be 'note' or 'plan', got '{other}'"
            ))),
        }
    }
}

/// Runtime configuration for the document type registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub yff_enabled: bool,
    pub fagskolen_enabled: bool,
    pub laereplan_variant: LaereplanVariant,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            yff_enabled: true,
            fagskolen_enabled: true,
            laereplan_variant: LaereplanVariant::default(),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Used by [`Self::from_env`]; tests pass a map instead of touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let yff_enabled = lookup("YFF_ENABLED")
            .map(|v| parse_flag("YFF_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);

        let fagskolen_enabled = lookup("FAGSKOLEN_ENABLED")
            .map(|v| parse_flag("FAGSKOLEN_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);

        let laereplan_variant = lookup("YFF_LAEREPLAN_VARIANT")
            .map(|v| LaereplanVariant::parse(&v))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            yff_enabled,
            fagskolen_enabled,
            laereplan_variant,
        })
    }

    pub fn with_yff(mut self, enabled: bool) -> Self {
        self.yff_enabled = enabled;
        self
    }

    pub fn with_fagskolen(mut self, enabled: bool) -> Self {
        self.fagskolen_enabled = enabled;
        self
    }

    pub fn with_laereplan_variant(mut self, variant: LaereplanVariant) -> Self {
        self.laereplan_variant = variant;
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(DocumentError::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
