//! Visibility and mutation rules
//!
//! News items and comments are public. Comments can only be changed by their
//! author; everyone else is told the comment does not exist.

use crate::actor::{Actor, UserId};
use std::fmt;

/// A resource with a single, fixed owner.
pub trait Owned {
	fn owner(&self) -> UserId;
}

/// Actions that change an owned resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
	Edit,
	Delete,
}

impl fmt::Display for Mutation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Edit => write!(f, "edit"),
			Self::Delete => write!(f, "delete"),
		}
	}
}

/// Outcome of a mutation authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
	/// The actor owns the resource.
	Allow,
	/// The actor is authenticated but does not own the resource. Callers must
	/// answer exactly as if the resource did not exist.
	DenyNotFound,
	/// The actor is anonymous and must log in first.
	RedirectToLogin,
}

impl Decision {
	pub fn is_allowed(self) -> bool {
		self == Self::Allow
	}

	/// Converts the decision into a `Result` so callers can use `?`.
	///
	/// # Examples
	///
	/// ```
	/// use newsroom_auth::{AccessError, Decision};
	///
	/// assert!(Decision::Allow.into_result().is_ok());
	/// assert!(matches!(Decision::DenyNotFound.into_result(), Err(AccessError::NotOwner)));
	/// assert!(matches!(Decision::RedirectToLogin.into_result(), Err(AccessError::Unauthenticated)));
	/// ```
	pub fn into_result(self) -> AccessResult<()> {
		match self {
			Self::Allow => Ok(()),
			Self::DenyNotFound => Err(AccessError::NotOwner),
			Self::RedirectToLogin => Err(AccessError::Unauthenticated),
		}
	}
}

/// Access failures. Both are expected outcomes surfaced to the user, not faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
	#[error("Authentication required")]
	Unauthenticated,
	// Same message as a missing object.
	#[error("Object not found")]
	NotOwner,
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Mutation authorization: only the owner may edit or delete, and the
/// action does not influence the outcome.
pub fn can_mutate<O: Owned + ?Sized>(actor: &Actor, object: &O, action: Mutation) -> Decision {
	let decision = match actor {
		Actor::Anonymous => Decision::RedirectToLogin,
		Actor::Authenticated(user) if user.id == object.owner() => Decision::Allow,
		Actor::Authenticated(_) => Decision::DenyNotFound,
	};
	tracing::debug!(%actor, %action, ?decision, "Mutation authorization");
	decision
}

/// News items and their comments are readable by everyone.
pub fn can_view<T: ?Sized>(_actor: &Actor, _resource: &T) -> bool {
	true
}
