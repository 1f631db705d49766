/// A single code point of a label.
///
/// Kept as a raw `u32` rather than `char`: tables may reference code points that are not
/// Unicode scalar values (surrogates), and they still need to round-trip through diagnostics.
pub type CodePoint = u32;

/// Render a label as space-separated `U+XXXX` code points.
///
/// At least four upper-case hex digits are emitted per code point; wider code points keep all
/// of their digits. An empty label renders as the empty string.
pub fn format_cp(label: &[CodePoint]) -> String {
    label
        .iter()
        .map(|cp| format!("U+{cp:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
