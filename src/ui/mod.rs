use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_cancelled_operation_canceled() {
        assert!(prompt_cancelled(&InquireError::OperationCanceled));
    }

    #[test]
    fn test_prompt_cancelled_operation_interrupted() {
        assert!(prompt_cancelled(&InquireError::OperationInterrupted));
    }

    #[test]
    fn test_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!prompt_cancelled(&err));
    }
}
