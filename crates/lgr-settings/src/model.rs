use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `lgr.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LgrConfigV1 {
    /// Optional schema string for tooling (`lgr.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Diagnostics profile: `quiet`, `default` or `verbose`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticsConfig {
    /// Override profile verbosity: `off`, `outcome`, `conditions`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<String>,

    /// Override profile sink: `none` or `tracing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<String>,
}
