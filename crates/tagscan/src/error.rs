use thiserror::Error;

/// Errors surfaced by a prefix scan.
///
/// Absent or empty content is not an error; it produces an empty token list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A prefix character was found but no separator follows it before the
    /// end of the content.
    ///
    /// Raised only under [`TerminatorMode::RequireSeparator`]. The caller
    /// should treat this as a validation failure of the content being set:
    /// the token lists could not be fully computed.
    ///
    /// [`TerminatorMode::RequireSeparator`]: crate::TerminatorMode::RequireSeparator
    #[error("unterminated token: no separator after '{prefix}' at byte {offset}")]
    UnterminatedToken {
        /// The prefix character that opened the unterminated token.
        prefix: char,
        /// Byte offset of that prefix character in the scanned content.
        offset: usize,
    },
}
