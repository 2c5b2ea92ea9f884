// ============================================================================
// Order Validation Errors
// ============================================================================

/// The single error taxonomy of the core.
///
/// Raised synchronously at the point of invalid input and never recovered
/// internally. Blocked dispatches and empty histories are expected states,
/// not errors; they are reported through return values instead.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Order id must be positive, got {0}")]
    InvalidId(i64),

    #[error("Delivery address cannot be blank")]
    BlankAddress,

    #[error("Distance cannot be negative, got {0} km")]
    NegativeDistance(f64),

    #[error("Courier name cannot be blank")]
    BlankCourierName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidId(-3).to_string(),
            "Order id must be positive, got -3"
        );
        assert_eq!(
            ValidationError::BlankAddress.to_string(),
            "Delivery address cannot be blank"
        );
        assert_eq!(
            ValidationError::NegativeDistance(-2.5).to_string(),
            "Distance cannot be negative, got -2.5 km"
        );
        assert_eq!(
            ValidationError::BlankCourierName.to_string(),
            "Courier name cannot be blank"
        );
    }
}
