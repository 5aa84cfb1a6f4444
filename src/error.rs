//! Error taxonomy.
//!
//! Only configuration problems are errors. Illegal placements are reported
//! as `false` by [`Grid::set_building`](crate::grid::Grid::set_building) and
//! an unreachable repair target is counted in
//! [`RepairReport`](crate::optimizer::RepairReport).

use thiserror::Error;

/// Errors raised when building a grid or validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CityError {
    /// Width or height is zero.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, CityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimensions() {
        let err = CityError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions 0x4: both must be positive"
        );
    }

    #[test]
    fn test_display_config() {
        let err = CityError::InvalidConfig("decay must be positive".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: decay must be positive"
        );
    }
}
