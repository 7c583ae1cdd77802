//! Predictable state container primitives.
//!
//! This module provides the traits and the store used by both
//! applications in this crate.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer ──→ State ──→ observers
//!    ↑                                                    │
//!    └────────────────── screens ─────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of a slice or of the root state
//! - **Action**: Operations and boundary results
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owner of the root state and the single write path

mod action;
mod container;
mod reducer;
mod state;

pub use action::Action;
pub use container::{Store, Subscription};
pub use reducer::Reducer;
pub use state::SliceState;
