use crate::{model::LgrConfigV1, presets};
use anyhow::Context;
use lgr_domain::diagnostics::Verbosity;
use lgr_domain::policy::{DiagnosticsPolicy, SinkKind};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub verbosity: Option<String>,
    pub sink: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: DiagnosticsPolicy,
}

pub fn resolve_config(cfg: LgrConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(v) = overrides
        .verbosity
        .as_deref()
        .or(cfg.diagnostics.verbosity.as_deref())
    {
        effective.verbosity =
            parse_verbosity(v).with_context(|| format!("invalid verbosity for profile {profile}"))?;
    }

    if let Some(s) = overrides.sink.as_deref().or(cfg.diagnostics.sink.as_deref()) {
        effective.sink = parse_sink(s).with_context(|| format!("invalid sink for profile {profile}"))?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_verbosity(v: &str) -> anyhow::Result<Verbosity> {
    match v {
        "off" => Ok(Verbosity::Off),
        "outcome" => Ok(Verbosity::Outcome),
        "conditions" | "all" => Ok(Verbosity::Conditions),
        other => anyhow::bail!("unknown verbosity: {other} (expected off|outcome|conditions)"),
    }
}

fn parse_sink(v: &str) -> anyhow::Result<SinkKind> {
    match v {
        "none" | "off" => Ok(SinkKind::None),
        "tracing" => Ok(SinkKind::Tracing),
        other => anyhow::bail!("unknown sink: {other} (expected none|tracing)"),
    }
}
