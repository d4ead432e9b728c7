//! Prefix token extraction for message bodies.
//!
//! A message body carries two kinds of inline markers: mentions (`@name`) and
//! tags (`#topic`). [`PrefixScanner`] pulls these out of free-form text in a
//! single left-to-right pass: each prefix character opens a token that runs
//! to the next ASCII space. The scan is deliberately simple. It is not
//! word-boundary aware, a prefix directly before a space yields an empty
//! token, and [`ScanOptions`] selects how a token that reaches the end of the
//! content is treated.
//!
//! ```rust
//! use tagscan::{extract_mentions, extract_tags};
//!
//! let body = Some("ship it @Alice #launch today");
//! assert_eq!(extract_mentions(body).unwrap(), ["Alice"]);
//! assert_eq!(extract_tags(body).unwrap(), ["launch"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod message;
mod options;
mod scanner;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use message::Message;
pub use options::{ScanOptions, TerminatorMode};
pub use scanner::{
    MENTION_PREFIX, PrefixScanner, TAG_PREFIX, TokenList, extract_mentions, extract_tags,
};
