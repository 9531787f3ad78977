//! Comment submission
//!
//! A submitted comment ends in exactly one of three states:
//!
//! - [`SubmissionOutcome::RedirectToLogin`]: the actor is anonymous; the text is
//!   never looked at
//! - [`SubmissionOutcome::Rejected`]: the text failed validation; nothing is stored
//! - [`SubmissionOutcome::Accepted`]: one comment row was created

use newsroom_auth::Actor;
use newsroom_db::{Comment, DbResult, NewComment, NewsId, Store};
use newsroom_forms::{CommentForm, ContentFilter};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
	RedirectToLogin,
	/// The bound form, carrying its field errors
	Rejected(CommentForm),
	Accepted(Comment),
}

/// Runs a comment submission against `news_id`.
///
/// The comment is persisted only after validation fully succeeds, with the
/// actor as author and the current time as creation timestamp.
pub async fn submit_comment(
	store: &dyn Store,
	filter: &ContentFilter,
	actor: &Actor,
	news_id: NewsId,
	data: HashMap<String, String>,
) -> DbResult<SubmissionOutcome> {
	let Some(user) = actor.user() else {
		tracing::debug!(%news_id, "Anonymous comment submission");
		return Ok(SubmissionOutcome::RedirectToLogin);
	};

	let mut form = CommentForm::new();
	form.bind(data);
	if !form.is_valid(filter) {
		tracing::warn!(
			user_id = %user.id,
			%news_id,
			errors = ?form.errors(),
			"Comment rejected"
		);
		return Ok(SubmissionOutcome::Rejected(form));
	}

	let text = form.cleaned_text().unwrap_or_default().to_string();
	let comment = store
		.create_comment(NewComment::new(news_id, user.id, text))
		.await?;
	tracing::info!(
		comment_id = %comment.id(),
		user_id = %user.id,
		%news_id,
		"Comment accepted"
	);
	Ok(SubmissionOutcome::Accepted(comment))
}
