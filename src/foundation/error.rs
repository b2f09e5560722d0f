/// Convenience result type used across osbscript.
pub type OsbResult<T> = Result<T, OsbError>;

/// Top-level error taxonomy used by the storyboard builder and writer.
#[derive(thiserror::Error, Debug)]
pub enum OsbError {
    /// A container needed a start/end default but no direct child specifies one.
    #[error("missing timing: {0}")]
    MissingRequiredTiming(String),

    /// A record slot was left unset where no start/end default applies.
    #[error("invalid field: {0}")]
    InvalidOptionalField(String),

    /// A value that cannot be written as a storyboard field.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Structurally invalid scene description.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure acquiring or writing the output sink.
    #[error("io error: {context}")]
    Io {
        /// What was being done when the failure happened.
        context: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OsbError {
    /// Build a [`OsbError::MissingRequiredTiming`] value.
    pub fn missing_timing(msg: impl Into<String>) -> Self {
        Self::MissingRequiredTiming(msg.into())
    }

    /// Build a [`OsbError::InvalidOptionalField`] value.
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidOptionalField(msg.into())
    }

    /// Build a [`OsbError::InvalidValue`] value.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build a [`OsbError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OsbError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`OsbError::Io`] value.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for OsbError {
    fn from(source: std::io::Error) -> Self {
        Self::io("write storyboard", source)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
