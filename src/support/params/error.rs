use thiserror::Error;

/// Errors that can occur while loading or reading runtime parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The parameter file could not be read.
    #[error("cannot read parameter file {path}: {message}")]
    Io { path: String, message: String },

    /// The parameter text is not a valid TOML table.
    #[error("cannot parse parameters: {message}")]
    Parse { message: String },

    /// The parameter is set, but not to a value of the requested type.
    #[error("parameter {name} must be an integer, found {found}")]
    WrongType { name: String, found: String },
}
