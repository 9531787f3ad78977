//! View errors and their HTTP responses
//!
//! All variants are expected outcomes of ordinary requests. They convert into
//! a [`Response`] with `?` in handlers or explicitly via `.into()`.

use crate::http::Response;
use crate::routes::login_redirect_url;
use newsroom_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
	/// Anonymous actor on a login-only page; `redirect_to` is the login URL with `next`.
	#[error("Authentication required")]
	Unauthenticated { redirect_to: String },
	/// Authenticated actor touching someone else's comment.
	#[error("Object not found")]
	NotOwner,
	#[error("Object not found")]
	NotFound,
	#[error("Method not allowed")]
	MethodNotAllowed,
	#[error("Bad request: {0}")]
	BadRequest(String),
	#[error(transparent)]
	Database(#[from] DbError),
}

impl ViewError {
	/// Builds the login redirect for an anonymous request to `next`.
	pub fn login_required(login_url: &str, next: &str) -> Self {
		Self::Unauthenticated {
			redirect_to: login_redirect_url(login_url, next),
		}
	}
}

pub type ViewResult<T> = Result<T, ViewError>;

impl From<ViewError> for Response {
	fn from(error: ViewError) -> Self {
		match error {
			ViewError::Unauthenticated { redirect_to } => Response::redirect(&redirect_to),
			// Same response as a missing comment.
			ViewError::NotOwner | ViewError::NotFound => Response::not_found(),
			ViewError::MethodNotAllowed => Response::method_not_allowed(),
			ViewError::BadRequest(_) => Response::bad_request(),
			ViewError::Database(e) => {
				// Log the full error server-side only; never expose it in the response
				tracing::error!("Database error while handling request: {:?}", e);
				Response::internal_server_error()
			}
		}
	}
}
