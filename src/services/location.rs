// src/services/location.rs
// DOCUMENTATION: Location port
// PURPOSE: Where the selector gets the user's position from

use crate::errors::LocationError;
use crate::models::{Position, PositionOptions};

/// Platform location service
/// DOCUMENTATION: One request per attempt; the selector enforces `options.timeout`
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError>;
}

/// Provider answering every request with the same outcome
/// DOCUMENTATION: Used by terminals without a geolocation service, where the
/// position comes from configuration
#[derive(Debug, Clone)]
pub struct FixedLocation(Result<Position, LocationError>);

impl FixedLocation {
    pub fn at(position: Position) -> Self {
        Self(Ok(position))
    }

    pub fn failing(error: LocationError) -> Self {
        Self(Err(error))
    }
}

impl LocationProvider for FixedLocation {
    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError> {
        log::debug!(
            "Fixed location requested (high_accuracy={}, maximum_age={:?})",
            options.enable_high_accuracy,
            options.maximum_age
        );
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_location() {
        let options = PositionOptions::default();

        let here = FixedLocation::at(Position::new(40.0, -74.0));
        assert_eq!(
            here.current_position(&options).await,
            Ok(Position::new(40.0, -74.0))
        );

        let denied = FixedLocation::failing(LocationError::PermissionDenied);
        assert_eq!(
            denied.current_position(&options).await,
            Err(LocationError::PermissionDenied)
        );
    }
}
