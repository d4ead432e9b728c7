//! The prefix token scanner.
//!
//! A scan walks the content left to right. Each occurrence of the prefix
//! character opens a token that runs to the next ASCII space; the scan then
//! resumes at that space. The scanner is not word-boundary aware: a prefix in
//! the middle of a word still opens a token, and a prefix directly followed
//! by a space yields an empty token. Both behaviors are part of the contract,
//! not accidents.

use alloc::vec::Vec;

use crate::{
    error::ScanError,
    options::{ScanOptions, TerminatorMode},
};

/// The only separator recognized by the scan.
const SEPARATOR: char = ' ';

/// Prefix character marking a mention token.
pub const MENTION_PREFIX: char = '@';

/// Prefix character marking a tag token.
pub const TAG_PREFIX: char = '#';

/// Tokens in discovery order, borrowed from the scanned content.
///
/// Each token excludes its leading prefix character and the separator that
/// closed it.
pub type TokenList<'a> = Vec<&'a str>;

/// A scanner extracting tokens marked by a fixed prefix character.
///
/// The scanner is a pure function of its input: it performs no I/O, holds no
/// state across scans, and may be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use tagscan::PrefixScanner;
///
/// let scanner = PrefixScanner::new('@');
/// let tokens = scanner.scan(Some("hello @Alice world")).unwrap();
/// assert_eq!(tokens, ["Alice"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixScanner {
    prefix: char,
    options: ScanOptions,
}

impl PrefixScanner {
    /// Creates a scanner for `prefix` with default options.
    #[must_use]
    pub fn new(prefix: char) -> Self {
        Self::with_options(prefix, ScanOptions::default())
    }

    /// Creates a scanner for `prefix` with explicit options.
    #[must_use]
    pub fn with_options(prefix: char, options: ScanOptions) -> Self {
        Self { prefix, options }
    }

    /// The prefix character this scanner looks for.
    #[must_use]
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Extracts all prefixed tokens from `content`, in discovery order.
    ///
    /// Absent and empty content both produce an empty list. Tokens borrow
    /// from `content`; a token may itself contain further prefix characters,
    /// which are not re-scanned.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedToken`] under
    /// [`TerminatorMode::RequireSeparator`] when the final prefixed token is
    /// not closed by a separator.
    pub fn scan<'a>(&self, content: Option<&'a str>) -> Result<TokenList<'a>, ScanError> {
        let mut tokens = TokenList::new();
        let Some(content) = content else {
            return Ok(tokens);
        };
        // Byte offset of the unscanned suffix. After a token closes, the
        // cursor sits on the separator itself: the separator byte is
        // re-examined as ordinary content on the next pass.
        let mut cursor = 0;
        while let Some(found) = content[cursor..].find(self.prefix) {
            let prefix_at = cursor + found;
            let token_start = prefix_at + self.prefix.len_utf8();
            match content[token_start..].find(SEPARATOR) {
                Some(separator) => {
                    let token_end = token_start + separator;
                    tokens.push(&content[token_start..token_end]);
                    cursor = token_end;
                }
                None => match self.options.terminator {
                    TerminatorMode::RequireSeparator => {
                        return Err(ScanError::UnterminatedToken {
                            prefix: self.prefix,
                            offset: prefix_at,
                        });
                    }
                    TerminatorMode::ImplicitEnd => {
                        tokens.push(&content[token_start..]);
                        break;
                    }
                },
            }
        }
        Ok(tokens)
    }
}

/// Extracts `@`-prefixed mention tokens from `content` with default options.
///
/// # Errors
///
/// See [`PrefixScanner::scan`].
pub fn extract_mentions(content: Option<&str>) -> Result<TokenList<'_>, ScanError> {
    PrefixScanner::new(MENTION_PREFIX).scan(content)
}

/// Extracts `#`-prefixed tag tokens from `content` with default options.
///
/// # Errors
///
/// See [`PrefixScanner::scan`].
pub fn extract_tags(content: Option<&str>) -> Result<TokenList<'_>, ScanError> {
    PrefixScanner::new(TAG_PREFIX).scan(content)
}
