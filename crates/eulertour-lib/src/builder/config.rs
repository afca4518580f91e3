//! Assembly configuration.

use crate::constants::{is_valid_k, DEFAULT_K};
use crate::error::{AssemblyError, Result};

/// Configuration parameters for building an assembly graph
#[derive(Debug, Clone)]
pub struct AssemblyConfiguration {
    /// K-mer length (must be at least 2)
    pub k: usize,
}

impl Default for AssemblyConfiguration {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

impl AssemblyConfiguration {
    /// Create a new configuration with the specified k-mer length
    ///
    /// # Errors
    /// Returns [`AssemblyError::InvalidK`] if `k < 2`.
    pub fn new(k: usize) -> Result<Self> {
        let config = Self { k };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !is_valid_k(self.k) {
            return Err(AssemblyError::InvalidK { k: self.k });
        }
        Ok(())
    }

    /// Log configuration parameters via tracing
    pub fn print(&self) {
        tracing::info!("Assembly configuration:");
        tracing::info!("  k = {}", self.k);
    }
}
