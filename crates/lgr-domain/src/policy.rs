use crate::diagnostics::{DiagnosticSink, NoopSink, TracingSink, Verbosity};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkKind {
    /// Drop every event.
    None,
    /// Forward to the `tracing` crate.
    Tracing,
}

/// Effective diagnostics settings, resolved by `lgr-settings`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticsPolicy {
    pub profile: String,
    pub verbosity: Verbosity,
    pub sink: SinkKind,
}

impl DiagnosticsPolicy {
    pub fn quiet() -> Self {
        Self {
            profile: "quiet".to_string(),
            verbosity: Verbosity::Off,
            sink: SinkKind::None,
        }
    }

    /// Whether building a sink from this policy can produce any output at all.
    pub fn is_enabled(&self) -> bool {
        self.sink != SinkKind::None && self.verbosity != Verbosity::Off
    }

    pub fn build_sink(&self) -> Box<dyn DiagnosticSink> {
        if !self.is_enabled() {
            return Box::new(NoopSink);
        }
        match self.sink {
            SinkKind::None => Box::new(NoopSink),
            SinkKind::Tracing => Box::new(TracingSink::new(self.verbosity)),
        }
    }
}
