/// Configuration options for a prefix scan.
///
/// # Examples
///
/// ```rust
/// use tagscan::{PrefixScanner, ScanOptions, TerminatorMode};
///
/// let options = ScanOptions {
///     terminator: TerminatorMode::ImplicitEnd,
/// };
/// let scanner = PrefixScanner::with_options('@', options);
/// assert_eq!(scanner.scan(Some("cc @Bob")).unwrap(), ["Bob"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// How a prefixed token that reaches the end of the content is treated.
    ///
    /// # Default
    ///
    /// [`TerminatorMode::RequireSeparator`]
    pub terminator: TerminatorMode,
}

/// Policy for a prefixed token with no separator before the end of content.
///
/// Every token is normally closed by an ASCII space. When the last prefixed
/// token in the content runs to the end of the text instead, the scan either
/// rejects the content or closes the token at the end, depending on this
/// mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerminatorMode {
    /// Require an ASCII space after every prefixed token. A token that runs
    /// to the end of the content fails the scan with
    /// [`ScanError::UnterminatedToken`], rejecting the content as malformed.
    ///
    /// [`ScanError::UnterminatedToken`]: crate::ScanError::UnterminatedToken
    #[default]
    RequireSeparator,
    /// Treat the end of the content as an implicit separator: the final
    /// token extends to the end of the text, and the scan never fails.
    ImplicitEnd,
}
