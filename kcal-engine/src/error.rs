#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    /// A request field is missing, unparsable or out of range. The message
    /// is suitable for showing to the user.
    #[error("{0}")]
    Validation(String),
    /// A formula produced an unusable value. The detail is for logs, not
    /// for the user.
    #[error("calculation failed: {0}")]
    Internal(String),
}

impl CalculationError {
    pub fn validation(message: impl Into<String>) -> Self {
        CalculationError::Validation(message.into())
    }
}
