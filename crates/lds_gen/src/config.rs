//! Marginal-CDF table configuration.
//!
//! The n-sphere sampler inverts tabulated CDFs over a fixed grid of knots on
//! `[0, π]`. The knot count trades table-build cost against interpolation
//! accuracy. It is fixed per [`TableCache`](crate::math::tables::TableCache);
//! the process-wide cache uses [`DEFAULT_KNOTS`].

use crate::types::LdsError;

/// Default number of knots on `[0, π]`.
pub const DEFAULT_KNOTS: usize = 300;

/// Immutable table configuration.
///
/// Use [`TableConfigBuilder`] to construct non-default instances.
///
/// # Examples
///
/// ```rust
/// use lds_gen::config::{TableConfig, DEFAULT_KNOTS};
///
/// assert_eq!(TableConfig::default().knots(), DEFAULT_KNOTS);
///
/// let config = TableConfig::builder().knots(600).build().unwrap();
/// assert_eq!(config.knots(), 600);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TableConfigBuilder")
)]
pub struct TableConfig {
    /// Number of equally spaced knots on `[0, π]`.
    knots: usize,
}

impl TableConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }

    /// Returns the number of knots.
    #[inline]
    pub fn knots(&self) -> usize {
        self.knots
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidKnotCount`] if fewer than 2 knots are set.
    pub fn validate(&self) -> Result<(), LdsError> {
        if self.knots < 2 {
            return Err(LdsError::InvalidKnotCount(self.knots));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            knots: DEFAULT_KNOTS,
        }
    }
}

/// Builder for [`TableConfig`].
///
/// Also the deserialisation form of [`TableConfig`], so deserialised
/// configurations are validated the same way.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TableConfigBuilder {
    knots: Option<usize>,
}

impl TableConfigBuilder {
    /// Sets the number of knots.
    ///
    /// # Arguments
    ///
    /// * `knots` - Knot count, at least 2
    #[inline]
    pub fn knots(mut self, knots: usize) -> Self {
        self.knots = Some(knots);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LdsError::InvalidKnotCount`] if the knot count is below 2.
    pub fn build(self) -> Result<TableConfig, LdsError> {
        let config = TableConfig {
            knots: self.knots.unwrap_or(DEFAULT_KNOTS),
        };
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<TableConfigBuilder> for TableConfig {
    type Error = LdsError;

    fn try_from(builder: TableConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::builder().build().unwrap();
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.knots(), 300);
    }

    #[test]
    fn test_custom_knots() {
        let config = TableConfig::builder().knots(2).build().unwrap();
        assert_eq!(config.knots(), 2);
    }

    #[test]
    fn test_invalid_knots() {
        assert_eq!(
            TableConfig::builder().knots(1).build(),
            Err(LdsError::InvalidKnotCount(1))
        );
        assert_eq!(
            TableConfig::builder().knots(0).build(),
            Err(LdsError::InvalidKnotCount(0))
        );
    }

    #[test]
    fn test_try_from_builder() {
        let builder = TableConfig::builder().knots(40);
        assert_eq!(TableConfig::try_from(builder).unwrap().knots(), 40);
        assert!(TableConfig::try_from(TableConfig::builder().knots(1)).is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_table_config_serde_roundtrip() {
            let config = TableConfig::default();
            let json = serde_json::to_string(&config).unwrap();
            assert_eq!(json, r#"{"knots":300}"#);

            let parsed: TableConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, config);
        }

        #[test]
        fn test_deserialise_rejects_invalid_knots() {
            let err = serde_json::from_str::<TableConfig>(r#"{"knots":1}"#).unwrap_err();
            assert!(
                err.to_string()
                    .contains(&LdsError::InvalidKnotCount(1).to_string()),
                "unexpected error: {}",
                err
            );
        }

        #[test]
        fn test_deserialise_missing_knots_uses_default() {
            let parsed: TableConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(parsed.knots(), DEFAULT_KNOTS);
        }
    }
}
