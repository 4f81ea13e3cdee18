// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Event State: pointer gesture state for 3D viewports.
//!
//! This crate holds the small, headless pieces of state a viewport controller
//! needs to interpret a stream of pointer events:
//!
//! - [`buttons`]: the pressed button of a down/up event, the set of buttons held
//!   during a move, and keyboard modifiers.
//! - [`drag`]: the anchor of an in-progress gesture and the rubber band rectangle
//!   drawn from it.
//! - [`mode`]: the interaction mode a move event resolves to.
//!
//! Nothing here talks to a renderer or a toolkit. The `orrery_interaction`
//! crate combines these pieces into a controller.
//!
//! ## Resolving a move
//!
//! ```rust
//! use kurbo::Point;
//! use orrery_event_state::buttons::{Modifiers, PointerButtons};
//! use orrery_event_state::drag::{AREA_TOLERANCE, DragState};
//! use orrery_event_state::mode::InteractionMode;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(50.0, 50.0));
//!
//! // Secondary button with shift draws a zoom box.
//! let mode = InteractionMode::resolve(PointerButtons::SECONDARY, Modifiers::SHIFT);
//! assert_eq!(mode, InteractionMode::AreaZoomDraw);
//!
//! // One pixel of jitter is not a box yet.
//! assert!(!drag.extend_box(Point::new(51.0, 50.0), AREA_TOLERANCE));
//! assert_eq!(drag.rect(), None);
//!
//! // A real drag is.
//! assert!(drag.extend_box(Point::new(80.0, 90.0), AREA_TOLERANCE));
//! assert_eq!(drag.rect(), Some(kurbo::Rect::new(50.0, 50.0, 80.0, 90.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod buttons;
pub mod drag;
pub mod mode;
