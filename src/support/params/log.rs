use tracing::info;

use super::{ParamLog, ParamSpec};

/// Column at which parameter comments start in a [`DocLog`].
const COMMENT_COLUMN: usize = 32;

/// A [`ParamLog`] that emits one `info` event per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ParamLog for TracingLog {
    fn log_version(&mut self, module: &str, version: &str, description: &str) {
        info!(module, version, description, "module parameters");
    }

    fn log_param(&mut self, spec: &ParamSpec, value: i64) {
        info!(
            name = spec.name,
            value,
            units = spec.units,
            default = spec.default,
            valid_range = ?spec.valid_range,
            description = spec.description,
            "parameter"
        );
    }
}

/// A [`ParamLog`] that renders a parameter document.
///
/// The output is itself a valid parameter listing: assignments start at
/// column zero and everything else is a `!` comment.
///
/// ```text
/// ! === module unit_scale ===
/// ! version 0.1.0
/// ! Parameters for doing unit scaling of variables.
/// Z_RESCALE_POWER = 2             !   [nondim] default = 0
///                                 ! An integer power of 2 ...
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocLog {
    text: String,
}

impl DocLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document rendered so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ParamLog for DocLog {
    fn log_version(&mut self, module: &str, version: &str, description: &str) {
        self.text.push_str(&format!("! === module {module} ===\n"));
        self.text.push_str(&format!("! version {version}\n"));
        self.text.push_str(&format!("! {description}\n"));
    }

    fn log_param(&mut self, spec: &ParamSpec, value: i64) {
        let assignment = format!("{} = {value}", spec.name);
        self.text.push_str(&format!(
            "{assignment:<COMMENT_COLUMN$}!   [{}] default = {}\n",
            spec.units, spec.default
        ));
        self.text.push_str(&format!(
            "{:COMMENT_COLUMN$}! {}\n",
            "", spec.description
        ));
        if let Some((min, max)) = spec.valid_range {
            self.text.push_str(&format!(
                "{:COMMENT_COLUMN$}! Valid values range from {min} to {max}.\n",
                ""
            ));
        }
    }
}
