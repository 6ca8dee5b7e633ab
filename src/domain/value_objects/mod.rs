//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **WorkspaceId / EntryId / MembershipId / ChatRoomId**: typed snowflake
//!   ids, one per record kind, so an entry id can never be passed where a
//!   workspace id is expected

mod id;

pub use id::*;
