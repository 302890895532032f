use thiserror::Error as ThisError;

///
/// FieldError
/// Failed lookup of a field identity by name or position.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("{owner} has no field at index {index}")]
    OutOfRange { owner: &'static str, index: usize },

    #[error("{owner} has no field named '{name}'")]
    Unknown { owner: &'static str, name: String },
}

impl FieldError {
    pub(crate) fn unknown(owner: &'static str, name: impl Into<String>) -> Self {
        Self::Unknown {
            owner,
            name: name.into(),
        }
    }

    /// Owner type the lookup ran against.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        match self {
            Self::OutOfRange { owner, .. } | Self::Unknown { owner, .. } => *owner,
        }
    }
}
