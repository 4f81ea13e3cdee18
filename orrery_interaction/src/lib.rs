// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orrery Interaction: mouse and keyboard control of a 3D viewport.
//!
//! A host widget forwards its raw pointer, wheel, key, focus, resize and paint
//! notifications to an [`InteractionController`]. The controller interprets them
//! and drives two collaborators:
//!
//! - a [`Viewer`], which owns the camera, the scene and picking;
//! - the [`ViewportHost`], which owns cursors, focus, redraw scheduling and the
//!   window.
//!
//! Mouse gestures map to camera operations by button and modifier:
//!
//! | held                | gesture                          |
//! |---------------------|----------------------------------|
//! | primary             | orbit; a click picks             |
//! | secondary           | continuous zoom                  |
//! | middle              | pan                              |
//! | shift + secondary   | rubber band, zoom to it          |
//! | shift + primary     | rubber band, pick inside it      |
//! | wheel               | zoom in or out by a fixed factor |
//!
//! Shift-clicking adds to the viewer's selection. Keys are looked up in a
//! [`KeyBindingTable`] built on attach (see [`default_bindings`]).
//!
//! Picks that replace the selection are published on a
//! [`SelectionBroadcaster`](orrery_selection::SelectionBroadcaster) so that side
//! panels can follow along.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use orrery_event_state::buttons::{Modifiers, PointerButton, PointerButtons};
//! use orrery_interaction::{
//!     ControllerConfig, CursorIcon, InteractionController, Viewer, ViewportHost,
//! };
//! use orrery_selection::SubscriberId;
//!
//! #[derive(Debug)]
//! struct Never;
//! impl core::fmt::Display for Never {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str("never")
//!     }
//! }
//! impl core::error::Error for Never {}
//!
//! /// A viewer with a single object under every pixel.
//! #[derive(Default)]
//! struct Scene {
//!     rotations: usize,
//! }
//!
//! impl Viewer for Scene {
//!     type Shape = &'static str;
//!     type Error = Never;
//!
//!     fn begin_rotation(&mut self, _: Point) {}
//!     fn rotate(&mut self, _: Point) { self.rotations += 1; }
//!     fn pan(&mut self, _: f64, _: f64) {}
//!     fn dynamic_zoom(&mut self, _: Point, _: Point) {}
//!     fn zoom_by_factor(&mut self, _: f64) {}
//!     fn zoom_to_area(&mut self, _: Rect) {}
//!     fn pick(&mut self, _: Point) -> Result<Vec<&'static str>, Never> { Ok(vec!["box"]) }
//!     fn pick_additive(&mut self, p: Point) -> Result<Vec<&'static str>, Never> { self.pick(p) }
//!     fn pick_area(&mut self, _: Rect) -> Result<Vec<&'static str>, Never> { Ok(vec!["box"]) }
//!     fn pick_at_point(&mut self, p: Point) -> Result<Vec<&'static str>, Never> { self.pick(p) }
//!     fn move_to(&mut self, _: Point) {}
//!     fn repaint(&mut self) {}
//!     fn resize(&mut self, _: Size) {}
//!     fn set_wireframe(&mut self) {}
//!     fn set_shaded(&mut self) {}
//!     fn enable_anti_aliasing(&mut self) {}
//!     fn disable_anti_aliasing(&mut self) {}
//!     fn set_hidden_line_removal(&mut self) {}
//!     fn fit_all(&mut self) {}
//!     fn set_selection_mode(&mut self) {}
//!     fn view_iso(&mut self) {}
//!     fn view_above(&mut self) {}
//!     fn up(&mut self) {}
//! }
//!
//! /// A host without custom cursors.
//! struct Widget;
//!
//! impl ViewportHost for Widget {
//!     type Cursor = ();
//!     fn load_cursor(&mut self, _: CursorIcon) -> Option<()> { None }
//!     fn apply_cursor(&mut self, _: &()) {}
//!     fn restore_cursor(&mut self) {}
//! }
//!
//! let mut controller = InteractionController::new(Widget, ControllerConfig::default());
//! controller.attach(Scene::default(), Size::new(600.0, 400.0)).unwrap();
//!
//! let picked = std::rc::Rc::new(std::cell::Cell::new(0));
//! let seen = picked.clone();
//! controller
//!     .broadcaster()
//!     .subscribe(SubscriberId(1), move |result| {
//!         seen.set(seen.get() + result.len());
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! // Drag with the primary button to orbit, then release to pick.
//! controller.on_pointer_down(Point::new(100.0, 100.0), PointerButton::Primary).unwrap();
//! controller
//!     .on_pointer_move(Point::new(120.0, 80.0), PointerButtons::PRIMARY, Modifiers::empty())
//!     .unwrap();
//! controller
//!     .on_pointer_up(Point::new(120.0, 80.0), PointerButton::Primary, Modifiers::empty())
//!     .unwrap();
//!
//! assert_eq!(controller.viewer().unwrap().rotations, 1);
//! assert_eq!(picked.get(), 1);
//! assert_eq!(controller.cursor(), CursorIcon::Arrow);
//! ```
//!
//! All calls are synchronous and happen on the caller's thread; the controller is
//! neither `Send` nor `Sync`.

mod config;
mod controller;
mod cursor;
mod error;
mod keymap;
mod viewer;

pub use config::{ControllerConfig, RubberBandStyle};
pub use controller::InteractionController;
pub use cursor::{CursorIcon, CursorManager};
pub use error::{ControllerError, KeymapError};
pub use keymap::{KeyBindingTable, KeyCode, ViewerCommand, default_bindings};
pub use viewer::{Projection, Viewer, ViewportHost};
