//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::profile::DEFAULT_BUILD_TIME_MS_PER_KB;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".build-profiler.toml";

/// Number of modules shown when neither CLI nor config says otherwise
pub const DEFAULT_TOP: usize = 20;

/// build-profiler configuration file structure
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of modules shown in the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,

    /// Fail when any module exceeds this size in KB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<u64>,

    /// Build-time proxy rate for formats without timing data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time_ms_per_kb: Option<f64>,

    /// Pass `ANALYZE=true` to `next build`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyze: Option<bool>,
}

impl ConfigFile {
    /// Validate value ranges
    pub fn validate(&self) -> Result<()> {
        if self.top == Some(0) {
            anyhow::bail!("top must be at least 1");
        }

        if let Some(rate) = self.build_time_ms_per_kb {
            if !rate.is_finite() || rate < 0.0 {
                anyhow::bail!(
                    "build-time-ms-per-kb must be a non-negative number (got {})",
                    rate
                );
            }
        }

        Ok(())
    }

    /// Configured table size, or the default
    pub fn top_or_default(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP)
    }

    /// Configured build-time rate, or 1 ms per KB
    pub fn ms_per_kb_or_default(&self) -> f64 {
        self.build_time_ms_per_kb
            .unwrap_or(DEFAULT_BUILD_TIME_MS_PER_KB)
    }

    /// Whether the analysis mode is requested (default on)
    pub fn analyze_or_default(&self) -> bool {
        self.analyze.unwrap_or(true)
    }
}
