use lgr_domain::diagnostics::Verbosity;
use lgr_domain::policy::{DiagnosticsPolicy, SinkKind};

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything finer goes into the `[diagnostics]` table.
pub fn preset(profile: &str) -> DiagnosticsPolicy {
    match profile {
        "quiet" => DiagnosticsPolicy::quiet(),
        "verbose" => verbose_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> DiagnosticsPolicy {
    DiagnosticsPolicy {
        profile: "default".to_string(),
        verbosity: Verbosity::Outcome,
        sink: SinkKind::Tracing,
    }
}

fn verbose_profile() -> DiagnosticsPolicy {
    DiagnosticsPolicy {
        profile: "verbose".to_string(),
        verbosity: Verbosity::Conditions,
        sink: SinkKind::Tracing,
    }
}
