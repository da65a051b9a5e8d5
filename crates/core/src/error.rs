/// Message shared by every "absent or forbidden" rejection so callers
/// cannot tell the two cases apart.
pub const NO_PERMISSION_MESSAGE: &str =
    "No permissions to referred object or it does not exist!";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A structural input error scoped to a single field.
    ///
    /// `path` uses slash notation rooted at the request body, e.g.
    /// `/1/widgets/2/row` (list positions are 1-based).
    #[error("Invalid parameter \"{path}\": {reason}.")]
    InvalidParameter { path: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("{}", NO_PERMISSION_MESSAGE)]
    NoPermission,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Stored data that no longer decodes into its domain shape.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::InvalidParameter`].
    pub fn invalid_parameter(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
