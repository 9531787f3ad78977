//! # Newsroom Views
//!
//! Named routes, page handlers and the comment submission flow.
//!
//! ## Architecture
//!
//! - [`routes`]: the route table, reversing and resolving paths
//! - [`http`](self::http): [`Request`], [`Response`] and the page [`Context`]
//! - [`error`]: [`ViewError`] and its mapping onto responses
//! - [`submission`]: the comment submission state machine
//! - [`views`]: one handler per page
//! - [`site`]: [`NewsSite`], which dispatches requests to the handlers
//!
//! ## Quick Start
//!
//! ```rust
//! use http::StatusCode;
//! use newsroom_auth::SessionActorResolver;
//! use newsroom_conf::Settings;
//! use newsroom_db::InMemoryStore;
//! use newsroom_views::{NewsSite, Request};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let site = NewsSite::new(
//!     Arc::new(InMemoryStore::new()),
//!     Arc::new(SessionActorResolver::new()),
//!     Settings::default(),
//! )
//! .unwrap();
//!
//! let response = site.handle(Request::get("/")).await;
//! assert_eq!(response.status, StatusCode::OK);
//!
//! let response = site.handle(Request::get("/edit_comment/1/")).await;
//! assert_eq!(response.location(), Some("/auth/login/?next=/edit_comment/1/"));
//! # }
//! ```

pub mod error;
pub mod http;
pub mod routes;
pub mod site;
pub mod submission;
pub mod views;

pub use error::{ViewError, ViewResult};
pub use self::http::{Context, Request, Response};
pub use routes::{COMMENTS_ANCHOR, Route, comments_url, login_redirect_url};
pub use site::NewsSite;
pub use submission::{SubmissionOutcome, submit_comment};
