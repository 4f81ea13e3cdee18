// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Selection: pick results and their delivery to interested parties.
//!
//! A viewport pick returns an ordered list of opaque shape handles owned by the
//! renderer. This crate provides:
//!
//! - [`SelectionResult`]: the ordered handles from one pick. Small picks are
//!   stored inline.
//! - [`SelectionBroadcaster`]: a one-to-many channel that hands each result to
//!   every subscriber, synchronously and in subscription order.
//! - [`SelectionHistory`]: a ready-made subscriber that accumulates everything
//!   that was ever picked.
//!
//! The broadcaster is small: there is no global event bus, no
//! queueing and no threads. `publish` returns only after every subscriber has
//! seen the result.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_selection::{SelectionBroadcaster, SelectionHistory, SelectionResult, SubscriberId};
//!
//! let broadcaster = SelectionBroadcaster::<&str>::new();
//! let history = SelectionHistory::new();
//! broadcaster
//!     .subscribe(SubscriberId(1), history.subscriber())
//!     .unwrap();
//!
//! let report = broadcaster.publish(&SelectionResult::from(vec!["face-3", "edge-7"]));
//! assert_eq!(report.delivered(), &[SubscriberId(1)]);
//! assert_eq!(history.items(), vec!["face-3", "edge-7"]);
//!
//! // Empty results are only delivered to subscribers that opted in.
//! let report = broadcaster.publish(&SelectionResult::empty());
//! assert!(report.delivered().is_empty());
//! ```
//!
//! ## Failure isolation
//!
//! Callbacks return `Result<(), CallbackError>`. A failing callback is logged
//! with [`log::warn!`] and recorded in the [`PublishReport`]; delivery to the
//! remaining subscribers continues.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod broadcaster;
mod history;
mod result;

pub use broadcaster::{
    CallbackError, Delivery, PublishReport, SelectionBroadcaster, SelectionError, SubscriberId,
};
pub use history::SelectionHistory;
pub use result::SelectionResult;
