//! Form processing and comment moderation for the newsroom site
//!
//! - [`CommentForm`]: the comment create/edit form
//! - [`ContentFilter`]: forbidden-word screening, failing with [`WARNING`]
//! - [`FieldError`]: field-level validation errors

pub mod comment_form;
pub mod field;
pub mod filter;

pub use comment_form::{CommentForm, FormError, FormResult};
pub use field::{FieldError, FieldResult};
pub use filter::{BAD_WORDS, ContentFilter, WARNING};
