//! Supporting-document context block.
//!
//! Lab reports and letters the person uploaded are quoted inside a
//! `<supporting_documents>` block appended to the system prompt. Filenames
//! are attribute-escaped and closing tags inside document text are
//! neutralized, so a document can never end the block early.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

const BLOCK_TAG: &str = "supporting_documents";
const DOCUMENT_TAG: &str = "document";

/// A supporting document with its extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingDocument {
    pub filename: String,
    pub text: String,
}

impl SupportingDocument {
    fn write_into(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "<{DOCUMENT_TAG} name=\"{}\">",
            escape_attribute(&self.filename)
        );
        let body = neutralize_closing_tags(self.text.trim_end_matches('\n'));
        if !body.is_empty() {
            out.push_str(&body);
            out.push('\n');
        }
        let _ = writeln!(out, "</{DOCUMENT_TAG}>");
    }
}

/// Build the context block for a set of documents.
///
/// Returns an empty string when `documents` is empty.
pub fn build_document_block(documents: &[SupportingDocument]) -> String {
    if documents.is_empty() {
        return String::new();
    }

    let mut block = format!("<{BLOCK_TAG}>\n");
    for document in documents {
        document.write_into(&mut block);
    }
    let _ = write!(block, "</{BLOCK_TAG}>");
    block
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Rewrite `</document` and `</supporting_documents` as `&lt;/...`.
fn neutralize_closing_tags(text: &str) -> String {
    [DOCUMENT_TAG, BLOCK_TAG]
        .iter()
        .fold(text.to_string(), |acc, tag| {
            acc.replace(&format!("</{tag}"), &format!("&lt;/{tag}"))
        })
}
