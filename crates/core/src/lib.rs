//! Montage Core - Shared types and pure content logic.
//!
//! This crate provides the pieces shared between the Montage components:
//! - `server` - Public portfolio site plus the admin JSON API
//! - `cli` - Command-line tools for migrations and admin provisioning
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. Everything here is deterministic and unit
//! testable without a running server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and the video provider enum
//! - [`slug`] - URL slug derivation for work items
//! - [`embed`] - Video embed resolution shared by every page renderer
//! - [`photos`] - Legacy/gallery photo field normalization for home sections
//! - [`ordering`] - Swap-based sibling reordering over a sparse sort key

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod embed;
pub mod ordering;
pub mod photos;
pub mod slug;
pub mod types;

pub use embed::{Embed, EmbedKind, resolve_embed};
pub use ordering::{Direction, SortSwap, plan_move};
pub use photos::PhotoSet;
pub use types::*;
