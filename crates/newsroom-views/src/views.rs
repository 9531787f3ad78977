//! Page handlers
//!
//! Each handler receives the site, the request and the already-resolved
//! actor, and returns either a response or a [`ViewError`] that converts into
//! one.

use crate::error::{ViewError, ViewResult};
use crate::http::{Context, Request, Response};
use crate::routes::comments_url;
use crate::site::NewsSite;
use crate::submission::{SubmissionOutcome, submit_comment};
use http::Method;
use newsroom_auth::{Actor, Decision, Mutation, can_mutate, can_view};
use newsroom_db::{Comment, CommentId, DbError, News, NewsId};
use newsroom_forms::CommentForm;

/// Home page: the latest news, newest first.
pub async fn home(site: &NewsSite, request: &Request, _actor: &Actor) -> ViewResult<Response> {
	require_method(request, &[Method::GET])?;
	let object_list = site
		.store()
		.latest_news(site.settings().news_count_on_home_page)
		.await?;
	Ok(Response::ok(Context {
		object_list: Some(object_list),
		..Context::default()
	}))
}

/// News detail page. GET shows the news with its comments; POST submits a
/// comment.
pub async fn detail(
	site: &NewsSite,
	request: &Request,
	actor: &Actor,
	news_id: NewsId,
) -> ViewResult<Response> {
	require_method(request, &[Method::GET, Method::POST])?;

	if request.method == Method::POST {
		if !actor.is_authenticated() {
			return Err(login_required(site, request));
		}
		let news = get_news_or_404(site, actor, news_id).await?;
		let outcome = submit_comment(
			site.store(),
			site.filter(),
			actor,
			news.id,
			request.form.clone(),
		)
		.await?;
		return match outcome {
			SubmissionOutcome::RedirectToLogin => Err(login_required(site, request)),
			SubmissionOutcome::Rejected(form) => render_detail(site, news, Some(form)).await,
			SubmissionOutcome::Accepted(_) => Ok(Response::redirect(&comments_url(news.id))),
		};
	}

	let news = get_news_or_404(site, actor, news_id).await?;
	let form = actor.is_authenticated().then(CommentForm::new);
	render_detail(site, news, form).await
}

async fn render_detail(
	site: &NewsSite,
	news: News,
	form: Option<CommentForm>,
) -> ViewResult<Response> {
	let comments = site.store().comments_for(news.id).await?;
	Ok(Response::ok(Context {
		news: Some(news),
		comments: Some(comments),
		form,
		..Context::default()
	}))
}

/// Comment edit page. GET shows the prefilled form; POST saves the new text.
pub async fn edit(
	site: &NewsSite,
	request: &Request,
	actor: &Actor,
	comment_id: CommentId,
) -> ViewResult<Response> {
	require_method(request, &[Method::GET, Method::POST])?;
	let comment = get_owned_comment(site, request, actor, comment_id, Mutation::Edit).await?;

	if request.method == Method::GET {
		let form = CommentForm::with_initial(comment.text());
		return Ok(Response::ok(Context {
			comment: Some(comment),
			form: Some(form),
			..Context::default()
		}));
	}

	let mut form = CommentForm::new();
	form.bind(request.form.clone());
	if !form.is_valid(site.filter()) {
		tracing::warn!(comment_id = %comment.id(), errors = ?form.errors(), "Comment edit rejected");
		return Ok(Response::ok(Context {
			comment: Some(comment),
			form: Some(form),
			..Context::default()
		}));
	}

	let text = form.cleaned_text().unwrap_or_default().to_string();
	let updated = site
		.store()
		.update_comment_text(comment.id(), text)
		.await
		.map_err(missing_as_not_found)?;
	tracing::info!(comment_id = %updated.id(), "Comment edited");
	Ok(Response::redirect(&comments_url(updated.news_id())))
}

/// Comment delete page. GET asks for confirmation; POST deletes.
pub async fn delete(
	site: &NewsSite,
	request: &Request,
	actor: &Actor,
	comment_id: CommentId,
) -> ViewResult<Response> {
	require_method(request, &[Method::GET, Method::POST])?;
	let comment = get_owned_comment(site, request, actor, comment_id, Mutation::Delete).await?;

	if request.method == Method::GET {
		return Ok(Response::ok(Context {
			comment: Some(comment),
			..Context::default()
		}));
	}

	site.store()
		.delete_comment(comment.id())
		.await
		.map_err(missing_as_not_found)?;
	tracing::info!(comment_id = %comment.id(), "Comment deleted");
	Ok(Response::redirect(&comments_url(comment.news_id())))
}

/// Login, logout and signup pages. Open to every actor.
pub async fn auth_page(_site: &NewsSite, request: &Request, _actor: &Actor) -> ViewResult<Response> {
	require_method(request, &[Method::GET])?;
	Ok(Response::ok(Context::default()))
}

fn require_method(request: &Request, allowed: &[Method]) -> ViewResult<()> {
	if allowed.contains(&request.method) {
		Ok(())
	} else {
		Err(ViewError::MethodNotAllowed)
	}
}

fn login_required(site: &NewsSite, request: &Request) -> ViewError {
	ViewError::login_required(&site.settings().login_url, &request.path)
}

// A row deleted by a concurrent request answers like one that never existed.
fn missing_as_not_found(error: DbError) -> ViewError {
	match error {
		DbError::DoesNotExist { .. } => ViewError::NotFound,
		other => ViewError::Database(other),
	}
}

async fn get_news_or_404(site: &NewsSite, actor: &Actor, news_id: NewsId) -> ViewResult<News> {
	match site.store().get_news(news_id).await? {
		Some(news) if can_view(actor, &news) => Ok(news),
		_ => Err(ViewError::NotFound),
	}
}

/// Looks up a comment the actor may mutate.
///
/// Anonymous actors are sent to the login page before the lookup, so they
/// learn nothing about which comments exist.
async fn get_owned_comment(
	site: &NewsSite,
	request: &Request,
	actor: &Actor,
	comment_id: CommentId,
	action: Mutation,
) -> ViewResult<Comment> {
	if !actor.is_authenticated() {
		return Err(login_required(site, request));
	}

	let comment = site
		.store()
		.get_comment(comment_id)
		.await?
		.ok_or(ViewError::NotFound)?;

	match can_mutate(actor, &comment, action) {
		Decision::Allow => Ok(comment),
		Decision::DenyNotFound => {
			tracing::warn!(%comment_id, %actor, %action, "Cross-user comment access denied");
			Err(ViewError::NotOwner)
		}
		Decision::RedirectToLogin => Err(login_required(site, request)),
	}
}
