//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use hackernews_core::common::{LinkId, UserId};
//!
//! let user_id = UserId::new(1);
//! let link_id = LinkId::new(1);
//!
//! // This would be a compile error:
//! // let wrong: LinkId = user_id;
//! # let _ = (user_id, link_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities.
pub struct User;

/// Marker type for Link entities (submitted URLs).
pub struct Link;

/// Marker type for Vote entities.
pub struct Vote;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Link entities.
pub type LinkId = Id<Link>;

/// Typed ID for Vote entities.
pub type VoteId = Id<Vote>;
