use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A required form value was absent. Only the front-ends raise this.
    #[error("Please enter {field}")]
    MissingInput { field: &'static str },

    /// The completion service refused the credentials.
    #[error("Authentication failed: {0}")]
    Credential(String),

    /// Any other failure of the completion call.
    #[error("Completion request failed: {0}")]
    CompletionService(String),
}

