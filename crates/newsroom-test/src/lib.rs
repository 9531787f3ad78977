//! # Newsroom Test
//!
//! Testing utilities for the newsroom site.
//!
//! - [`TestClient`]: in-process client with forced login
//! - [`fixtures`]: rstest fixtures for users, news and comments
//! - [`assertions`]: redirect, status and form-error assertions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsroom_test::assertions::assert_redirects;
//! use newsroom_test::fixtures::{Newsroom, newsroom};
//! use rstest::*;
//!
//! #[rstest]
//! #[tokio::test]
//! async fn test_edit_redirects_anonymous(newsroom: Newsroom) {
//!     let news = newsroom.news().await;
//!     let comment = newsroom.comment(&news).await;
//!     let url = format!("/edit_comment/{}/", comment.id());
//!
//!     let response = newsroom.client().get(&url).await;
//!
//!     assert_redirects(&response, &format!("/auth/login/?next={}", url));
//! }
//! ```

pub mod assertions;
pub mod client;
pub mod fixtures;

pub use assertions::{assert_form_error, assert_redirects, assert_status};
pub use client::TestClient;
pub use fixtures::{Newsroom, bad_words_data, form_data, newsroom};
