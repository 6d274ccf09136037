//! Dashboard configuration.
//!
//! Configuration is plain data with sensible defaults. Partial JSON
//! documents are accepted: any omitted field keeps its default value.
//!
//! # Examples
//!
//! ```
//! use obrafy::config::DashboardConfig;
//!
//! let config = DashboardConfig::from_json_str(r#"{"budget": {"warning_percent": 60.0}}"#)
//!     .expect("valid configuration");
//! assert!((config.budget.warning_percent - 60.0).abs() < f64::EPSILON);
//! assert_eq!(config.board.max_title_length, 200);
//! ```

use crate::kanban::domain::ColumnTitles;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level configuration for a project dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Kanban board settings.
    pub board: BoardConfig,
    /// Budget alert thresholds.
    pub budget: BudgetThresholds,
}

/// Kanban board settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Display titles of the fixed board columns.
    pub titles: ColumnTitles,
    /// Maximum task title length in characters.
    pub max_title_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            titles: ColumnTitles::default(),
            max_title_length: 200,
        }
    }
}

/// Budget usage percentages above which the ledger raises its alert level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetThresholds {
    /// Usage above this percentage is reported as a warning.
    pub warning_percent: f64,
    /// Usage above this percentage is reported as critical.
    pub critical_percent: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            warning_percent: 75.0,
            critical_percent: 90.0,
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The warning threshold does not sit below the critical threshold.
    #[error("budget warning threshold {warning}% must be below critical threshold {critical}%")]
    InvalidThresholds {
        /// Configured warning percentage.
        warning: f64,
        /// Configured critical percentage.
        critical: f64,
    },

    /// Task titles would be impossible to create.
    #[error("maximum task title length must be positive")]
    ZeroTitleLength,
}

impl DashboardConfig {
    /// Creates a strict configuration with tighter limits.
    ///
    /// Useful for crews that want earlier budget alerts and short card
    /// titles.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            board: BoardConfig {
                titles: ColumnTitles::default(),
                max_title_length: 80,
            },
            budget: BudgetThresholds {
                warning_percent: 60.0,
                critical_percent: 80.0,
            },
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// variants of [`ConfigError`] for inconsistent values.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThresholds`] when the warning threshold
    /// is not strictly below the critical one, and
    /// [`ConfigError::ZeroTitleLength`] when titles cannot hold a character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BudgetThresholds {
            warning_percent,
            critical_percent,
        } = self.budget;
        if warning_percent.is_nan() || critical_percent.is_nan() || warning_percent >= critical_percent {
            return Err(ConfigError::InvalidThresholds {
                warning: warning_percent,
                critical: critical_percent,
            });
        }
        if self.board.max_title_length == 0 {
            return Err(ConfigError::ZeroTitleLength);
        }
        Ok(())
    }
}
