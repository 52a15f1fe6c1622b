//! Fatal error reporting.
//!
//! Some configuration errors must stop a run outright: continuing would
//! produce results that look valid but are not. Code that hits such an
//! error hands the message to a [`FatalReporter`], which never returns.

use tracing::error;

/// Terminates the run with a message.
pub trait FatalReporter {
    /// Reports `message` and terminates; never returns control to the caller.
    fn fail(&self, message: &str) -> !;
}

/// A [`FatalReporter`] that panics with the message.
///
/// Suited to tests and to hosts that catch panics at a task boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicOnFatal;

impl FatalReporter for PanicOnFatal {
    fn fail(&self, message: &str) -> ! {
        panic!("FATAL: {message}");
    }
}

/// A [`FatalReporter`] that logs the message and exits the process.
#[derive(Debug, Clone, Copy)]
pub struct ExitOnFatal {
    /// Process exit status.
    pub code: i32,
}

impl Default for ExitOnFatal {
    fn default() -> Self {
        Self { code: 1 }
    }
}

impl FatalReporter for ExitOnFatal {
    fn fail(&self, message: &str) -> ! {
        error!(code = self.code, "FATAL: {message}");
        std::process::exit(self.code);
    }
}
