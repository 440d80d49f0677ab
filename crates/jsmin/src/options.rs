/// Caller-side options for [`minify_with`](crate::minify_with).
///
/// The minifier itself has exactly one behavior; these options only control
/// what happens to its output afterwards.
///
/// # Examples
///
/// ```rust
/// use jsmin::{MinifyOptions, minify_with};
///
/// let options = MinifyOptions {
///     trim: true,
///     ..Default::default()
/// };
/// assert_eq!(minify_with("var  a = 1;\n", options).unwrap(), "var a=1;");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinifyOptions {
    /// Whether to strip leading and trailing ASCII whitespace from the
    /// result.
    ///
    /// The raw output keeps the line break the minifier starts from whenever
    /// the first token is word-like or opens a group, e.g. `"\nvar a=1;"`.
    /// That line break is never significant, so callers that concatenate or
    /// inline scripts usually want it gone.
    ///
    /// # Default
    ///
    /// `false`
    pub trim: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(skip))]
    /// Panic on malformed input instead of returning an error.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces at the
    /// point of failure.
    pub panic_on_error: bool,
}
