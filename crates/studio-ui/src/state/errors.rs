/// Error from a user-triggered operation, with the project it concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationError {
    pub project_ref: String,
    pub message: String,
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
