//! Runtime parameters: where they come from and where they are recorded.
//!
//! Models read their configuration through a [`ParamSource`] and report
//! every resolved value to a [`ParamLog`], so a run always leaves behind a
//! record of the parameters it actually used.
//!
//! # Provided implementations
//!
//! - [`ParamFile`]: A [`ParamSource`] backed by a flat TOML table.
//! - [`TracingLog`]: A [`ParamLog`] that emits one [`tracing`] event per entry.
//! - [`DocLog`]: A [`ParamLog`] that renders a human-readable parameter document.
//!
//! # Example
//!
//! ```
//! use unit_scaling::support::params::{DocLog, ParamFile, ParamLog, ParamSource, ParamSpec};
//!
//! const NODES: ParamSpec = ParamSpec {
//!     name: "NODES",
//!     description: "Number of nodes.",
//!     units: "nondim",
//!     default: 5,
//!     valid_range: None,
//! };
//!
//! let params = ParamFile::from_toml_str("NODES = 12").unwrap();
//! let mut log = DocLog::new();
//!
//! let nodes = params.get_int(&NODES).unwrap();
//! log.log_param(&NODES, nodes);
//!
//! assert_eq!(nodes, 12);
//! assert!(log.text().starts_with("NODES = 12"));
//! ```

mod error;
mod file;
mod log;

pub use error::ParamError;
pub use file::ParamFile;
pub use log::{DocLog, TracingLog};

/// Static description of an integer runtime parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Key used to look the parameter up in a [`ParamSource`].
    pub name: &'static str,

    /// Human-readable description recorded alongside the value.
    pub description: &'static str,

    /// Units label, e.g. `"nondim"`.
    pub units: &'static str,

    /// Value used when the source does not set the parameter.
    pub default: i64,

    /// Inclusive `(min, max)` range of valid values, if restricted.
    pub valid_range: Option<(i64, i64)>,
}

/// A source of runtime parameter values.
pub trait ParamSource {
    /// Reads an integer parameter.
    ///
    /// Returns `spec.default` if the source does not set the parameter.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`] if the stored value cannot be read as an integer.
    fn get_int(&self, spec: &ParamSpec) -> Result<i64, ParamError>;
}

/// A sink recording module versions and resolved parameter values.
///
/// Logging is fire-and-forget: implementations must not fail.
pub trait ParamLog {
    /// Records the version of a module whose parameters follow.
    fn log_version(&mut self, module: &str, version: &str, description: &str);

    /// Records the resolved value of a parameter.
    fn log_param(&mut self, spec: &ParamSpec, value: i64);
}
