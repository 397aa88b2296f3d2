//! Error type for building a simulation.
//!
//! The simulation itself never fails once constructed; every error here is
//! raised by `GiftSystem::new` or by manifest parsing, before the first step.

use std::fmt;

/// Everything that can go wrong while setting up a gift simulation.
#[derive(Debug)]
pub enum SimError {
    /// A configuration value is outside its accepted range.
    InvalidConfig {
        /// Name of the `SimConfig` field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// `pool_capacity` was zero.
    ZeroCapacity,

    /// More gifts were supplied than the pool can hold.
    PoolOverflow {
        /// Number of body specs passed in.
        requested: usize,
        /// Configured `pool_capacity`.
        capacity: usize,
    },

    /// A JSON manifest or config document could not be parsed.
    Manifest(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfig {
                field,
                value,
                expected,
            } => write!(
                f,
                "invalid config: `{}` = {} (expected {})",
                field, value, expected
            ),
            SimError::ZeroCapacity => write!(f, "invalid config: `pool_capacity` must be at least 1"),
            SimError::PoolOverflow {
                requested,
                capacity,
            } => write!(
                f,
                "gift list has {} entries but the pool holds at most {}",
                requested, capacity
            ),
            SimError::Manifest(err) => write!(f, "manifest parse error: {}", err),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Manifest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = SimError::InvalidConfig {
            field: "spawn_interval",
            value: 0.0,
            expected: "> 0",
        };
        let msg = err.to_string();
        assert!(msg.contains("spawn_interval"), "message was {}", msg);
    }

    #[test]
    fn json_errors_convert_and_keep_source() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err: SimError = parse.unwrap_err().into();
        assert!(matches!(err, SimError::Manifest(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
