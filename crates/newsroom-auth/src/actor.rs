//! Actors
//!
//! An [`Actor`] is the requester as seen by the permission rules: either
//! anonymous, or an authenticated [`User`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub username: String,
}

impl User {
	pub fn new(id: UserId, username: impl Into<String>) -> Self {
		Self {
			id,
			username: username.into(),
		}
	}
}

/// The requester of an operation.
///
/// Anonymous actors carry no identifier and therefore own nothing.
///
/// # Examples
///
/// ```
/// use newsroom_auth::{Actor, User, UserId};
///
/// let anonymous = Actor::anonymous();
/// assert!(!anonymous.is_authenticated());
/// assert_eq!(anonymous.id(), None);
///
/// let actor = Actor::authenticated(User::new(UserId(7), "reader"));
/// assert!(actor.is_authenticated());
/// assert!(actor.owns(UserId(7)));
/// assert!(!actor.owns(UserId(8)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Actor {
	#[default]
	Anonymous,
	Authenticated(User),
}

impl Actor {
	/// Creates an anonymous (unauthenticated) actor.
	pub fn anonymous() -> Self {
		Self::Anonymous
	}

	/// Creates an authenticated actor for `user`.
	pub fn authenticated(user: User) -> Self {
		Self::Authenticated(user)
	}

	/// Returns whether the actor is authenticated.
	pub fn is_authenticated(&self) -> bool {
		matches!(self, Self::Authenticated(_))
	}

	/// Returns the user if authenticated.
	pub fn user(&self) -> Option<&User> {
		match self {
			Self::Authenticated(user) => Some(user),
			Self::Anonymous => None,
		}
	}

	/// Returns the user identifier if authenticated.
	pub fn id(&self) -> Option<UserId> {
		self.user().map(|user| user.id)
	}

	/// Ownership is derived, never stored: the actor owns a resource iff the
	/// identifiers match.
	pub fn owns(&self, owner: UserId) -> bool {
		self.id() == Some(owner)
	}
}

impl fmt::Display for Actor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Anonymous => write!(f, "anonymous"),
			Self::Authenticated(user) => write!(f, "{} (id={})", user.username, user.id),
		}
	}
}
