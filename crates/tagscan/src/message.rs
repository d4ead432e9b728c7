//! The message entity owning the scanned token lists.

use alloc::{string::String, vec::Vec};

use crate::{
    error::ScanError,
    scanner::{TokenList, extract_mentions, extract_tags},
};

/// A message whose body carries `@` mentions and `#` tags.
///
/// Setting the body re-extracts both token lists. The lists are recomputed as
/// a pair on every change, never merged with earlier results, and are empty
/// (not absent) for a message without a body. A body that fails extraction is
/// rejected: the message keeps its previous body and lists.
///
/// # Examples
///
/// ```rust
/// use tagscan::Message;
///
/// let msg = Message::with_body("crater", "ship it @Alice #launch today").unwrap();
/// assert_eq!(msg.mentions(), ["Alice"]);
/// assert_eq!(msg.tags(), ["launch"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    author: String,
    body: String,
    mentions: Vec<String>,
    tags: Vec<String>,
}

impl Message {
    /// Creates a message with an empty body and empty token lists.
    #[must_use]
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: String::new(),
            mentions: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Creates a message and sets its body in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`ScanError`] from body extraction; no message is produced.
    pub fn with_body(
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ScanError> {
        let mut message = Self::new(author);
        message.set_body(body)?;
        Ok(message)
    }

    /// Replaces the body, re-extracting mentions and tags.
    ///
    /// Both lists are scanned before anything is stored, so an error leaves
    /// the message untouched. Callers should surface the error as a
    /// validation failure of the new body.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedToken`] when the new body ends in an
    /// unterminated prefixed token.
    pub fn set_body(&mut self, body: impl Into<String>) -> Result<(), ScanError> {
        let body = body.into();
        let mentions = owned(extract_mentions(Some(&body))?);
        let tags = owned(extract_tags(Some(&body))?);
        self.body = body;
        self.mentions = mentions;
        self.tags = tags;
        Ok(())
    }

    /// The message author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The message body, empty until set.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Mention tokens extracted from the current body, in discovery order.
    #[must_use]
    pub fn mentions(&self) -> &[String] {
        &self.mentions
    }

    /// Tag tokens extracted from the current body, in discovery order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

fn owned(tokens: TokenList<'_>) -> Vec<String> {
    tokens.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_message_has_empty_lists() {
        let msg = Message::new("sample");

        assert_eq!(msg.author(), "sample");
        assert_eq!(msg.body(), "");
        assert!(msg.mentions().is_empty());
        assert!(msg.tags().is_empty());
    }

    #[rstest]
    #[case::empty_body("")]
    #[case::no_tokens("This is a test with no refs. It will generate an empty refs list.")]
    fn body_without_markers_yields_empty_lists(#[case] body: &str) {
        let mut msg = Message::new("sample");

        msg.set_body(body).unwrap();

        assert!(msg.mentions().is_empty());
        assert!(msg.tags().is_empty());
    }

    #[test]
    fn body_with_one_mention_yields_that_mention() {
        let mut msg = Message::new("sample");

        msg.set_body("This is a test with one ref. @SampleRef is the ref.")
            .unwrap();

        assert_eq!(msg.mentions(), ["SampleRef"]);
        assert!(msg.tags().is_empty());
    }

    #[test]
    fn body_with_multiple_mentions_yields_all_in_order() {
        let mut msg = Message::new("sample");

        msg.set_body(
            "This is a test with @MultipleRefs in it. @SampleRef is one. It will @Generate three.",
        )
        .unwrap();

        assert_eq!(msg.mentions(), ["MultipleRefs", "SampleRef", "Generate"]);
    }

    #[test]
    fn body_with_one_tag_yields_that_tag() {
        let mut msg = Message::new("sample");

        msg.set_body("This is a test with one tag. #SampleTag is the tag.")
            .unwrap();

        assert_eq!(msg.tags(), ["SampleTag"]);
        assert!(msg.mentions().is_empty());
    }

    #[test]
    fn body_with_multiple_tags_yields_all_in_order() {
        let mut msg = Message::new("sample");

        msg.set_body(
            "This is a test with #MultipleTags in it. #SampleTag is one. It will #Generate three.",
        )
        .unwrap();

        assert_eq!(msg.tags(), ["MultipleTags", "SampleTag", "Generate"]);
    }

    #[test]
    fn setting_a_new_body_replaces_both_lists() {
        let mut msg = Message::new("sample");
        msg.set_body("ping @Alice about #alpha today").unwrap();

        msg.set_body("ping @Bob about #beta today").unwrap();

        assert_eq!(msg.mentions(), ["Bob"]);
        assert_eq!(msg.tags(), ["beta"]);
    }

    #[test]
    fn rejected_body_leaves_the_message_untouched() {
        let mut msg = Message::new("sample");
        msg.set_body("ping @Alice about #alpha today").unwrap();

        let err = msg.set_body("trailing @mention").unwrap_err();

        assert_eq!(
            err,
            ScanError::UnterminatedToken {
                prefix: '@',
                offset: 9
            }
        );
        assert_eq!(msg.body(), "ping @Alice about #alpha today");
        assert_eq!(msg.mentions(), ["Alice"]);
        assert_eq!(msg.tags(), ["alpha"]);
    }

    #[test]
    fn with_body_builds_in_one_step() {
        let msg = Message::with_body("sample", "cc @Alice on #rollout now").unwrap();

        assert_eq!(msg.mentions(), ["Alice"]);
        assert_eq!(msg.tags(), ["rollout"]);
    }

    #[test]
    fn with_body_propagates_extraction_failure() {
        let err = Message::with_body("sample", "broken #tag").unwrap_err();

        assert_eq!(
            err,
            ScanError::UnterminatedToken {
                prefix: '#',
                offset: 7
            }
        );
    }
}
