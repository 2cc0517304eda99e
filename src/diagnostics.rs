use std::cell::RefCell;
use std::rc::Rc;

/// Reporting channel for setup and wiring problems.
///
/// The widget never fails hard on a malformed table block; it reports through
/// this trait and degrades. Hosts install [`TracingDiagnostics`] (or their
/// own sink), tests install [`RecordingDiagnostics`] and assert on what was
/// emitted.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Default sink: forwards to the `tracing` ecosystem, leaving subscriber
/// choice to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!(target: "cache_table_reset", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "cache_table_reset", "{message}");
    }
}

/// Shared-buffer sink for tests. Clones observe the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    events: Rc<RefCell<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.level == DiagnosticLevel::Error)
            .map(|event| event.message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.level == DiagnosticLevel::Info)
            .map(|event| event.message.clone())
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn info(&self, message: &str) {
        self.events.borrow_mut().push(Diagnostic {
            level: DiagnosticLevel::Info,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.events.borrow_mut().push(Diagnostic {
            level: DiagnosticLevel::Error,
            message: message.to_string(),
        });
    }
}
