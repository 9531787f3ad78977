//! # Newsroom Auth
//!
//! Who is asking, and what they may do.
//!
//! ## Architecture
//!
//! - [`actor`]: [`Actor`], [`User`] and the opaque [`UserId`]
//! - [`resolver`]: the [`ActorResolver`] seam and its session-backed implementation
//! - [`permissions`]: visibility and mutation rules for news items and comments
//!
//! ## Quick Start
//!
//! ```rust
//! use newsroom_auth::{Actor, Decision, Mutation, Owned, User, UserId, can_mutate};
//!
//! struct Note {
//!     owner: UserId,
//! }
//!
//! impl Owned for Note {
//!     fn owner(&self) -> UserId {
//!         self.owner
//!     }
//! }
//!
//! let author = User::new(UserId(1), "author");
//! let note = Note { owner: author.id };
//!
//! assert_eq!(can_mutate(&Actor::authenticated(author), &note, Mutation::Edit), Decision::Allow);
//! assert_eq!(can_mutate(&Actor::anonymous(), &note, Mutation::Edit), Decision::RedirectToLogin);
//! ```

pub mod actor;
pub mod permissions;
pub mod resolver;

pub use actor::{Actor, User, UserId};
pub use permissions::{
	AccessError, AccessResult, Decision, Mutation, Owned, can_mutate, can_view,
};
pub use resolver::{ActorResolver, SessionActorResolver};
