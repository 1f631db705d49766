use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::registry::{ClassRegistry, RuleRegistry, UnicodeOracle};
use lgr_types::{CodePoint, DispositionSet};

/// Everything one action evaluation reads.
///
/// Built per label by the caller and shared, read-only, by every action it tries.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub label: &'a [CodePoint],
    /// Dispositions of the variant code points that produced the label.
    pub disp_set: &'a DispositionSet,
    /// The label consists only of code points coming from variant mappings (reflexive
    /// mappings included).
    pub only_variants_flag: bool,
    pub rules: &'a dyn RuleRegistry,
    pub classes: &'a dyn ClassRegistry,
    pub unicode: &'a dyn UnicodeOracle,
    pub sink: &'a dyn DiagnosticSink,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        label: &'a [CodePoint],
        disp_set: &'a DispositionSet,
        only_variants_flag: bool,
        rules: &'a dyn RuleRegistry,
        classes: &'a dyn ClassRegistry,
        unicode: &'a dyn UnicodeOracle,
    ) -> Self {
        Self {
            label,
            disp_set,
            only_variants_flag,
            rules,
            classes,
            unicode,
            sink: &NoopSink,
        }
    }

    pub fn with_sink(self, sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink, ..self }
    }
}

impl std::fmt::Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalContext")
            .field("label", &lgr_types::format_cp(self.label))
            .field("disp_set", self.disp_set)
            .field("only_variants_flag", &self.only_variants_flag)
            .finish_non_exhaustive()
    }
}
