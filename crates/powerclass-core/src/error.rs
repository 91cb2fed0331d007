//! Failure taxonomy for property access.

use thiserror::Error;

/// Error returned by property reads, writes and event exports.
///
/// Mirrors the result conventions of the drivers this layer fronts: a driver
/// that has nothing to report yet is distinct from an absent device, from a
/// transient busy state, and from a genuine fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The driver has no data for this property yet.
    #[error("no data available")]
    NoData,

    /// The device is not present (removed battery, unplugged supply).
    #[error("device not present")]
    NotPresent,

    /// The device cannot answer right now; the caller may retry.
    #[error("device busy, try again")]
    Busy,

    /// User-supplied input could not be parsed for this property.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The driver misbehaved: a query or update failed outright, or the
    /// reported value violates the device's own declarations.
    #[error("driver fault: {0}")]
    Driver(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", PropertyError::NoData), "no data available");
        assert_eq!(
            format!("{}", PropertyError::InvalidInput("bogus".into())),
            "invalid input: bogus"
        );
        assert_eq!(
            format!("{}", PropertyError::Driver("query failed".into())),
            "driver fault: query failed"
        );
    }
}
