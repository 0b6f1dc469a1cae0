//! vigie-summary
//!
//! Structured text for the external language-model collaborator: the
//! intake summary (Tera template), the supporting-document context block and
//! the system/user prompt pair. Rendering only. The model call lives elsewhere.

pub mod context;
pub mod error;
pub mod prompt;
pub mod render;
pub mod view;
