//! Content extraction for preview rendering.
//!
//! Pulls inline image references out of a message body and accounts for
//! flagged attachments. Pure string work, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::MediaAttachment;

/// Inline image syntax: `![alt](url)`.
static INLINE_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\(([^)\s]+)\)").expect("inline image regex compiles"));

/// Result of extracting media from a message body and its attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    /// Public image URLs: inline references in order of appearance, then
    /// unflagged image attachments in attachment order.
    pub images: Vec<String>,
    /// The body with all inline image syntax removed.
    pub stripped_body: String,
    /// Number of image attachments excluded because they carry a
    /// content-warning flag.
    pub hidden_count: usize,
}

/// Extract image URLs from a body and its attachments.
///
/// Inline `![alt](url)` tokens are collected left to right and stripped from
/// the body. Image-typed attachments are appended to the list unless flagged;
/// flagged ones are only counted. Non-image attachments are ignored.
///
/// Whether to surface `hidden_count` to readers (e.g. a "(with N hidden
/// images)" suffix) is the caller's decision.
pub fn extract_media(body: &str, attachments: &[MediaAttachment]) -> Extracted {
    let mut images: Vec<String> = INLINE_IMAGE_RE
        .captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect();

    let stripped_body = INLINE_IMAGE_RE.replace_all(body, "").into_owned();

    let mut hidden_count = 0;
    for attachment in attachments.iter().filter(|a| a.is_image()) {
        if attachment.is_flagged() {
            hidden_count += 1;
        } else {
            images.push(attachment.media_url.clone());
        }
    }

    Extracted {
        images,
        stripped_body,
        hidden_count,
    }
}
