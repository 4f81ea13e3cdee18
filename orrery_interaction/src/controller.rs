// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport interaction state machine.
//!
//! [`InteractionController`] owns the gesture state for one viewport widget. The
//! host forwards its raw notifications; the controller turns them into
//! [`Viewer`] calls, cursor changes and published selections.
//!
//! Every pointer move re-resolves the [`InteractionMode`] from the held buttons
//! and modifiers, so a gesture can change meaning mid-drag (pressing Shift while
//! zooming turns the drag into a rubber band). The mode in effect on the last move
//! decides what pointer-up finishes.

use core::fmt;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use orrery_event_state::buttons::{Modifiers, PointerButton, PointerButtons};
use orrery_event_state::drag::DragState;
use orrery_event_state::mode::InteractionMode;
use orrery_selection::{SelectionBroadcaster, SelectionHistory, SelectionResult};

use crate::config::ControllerConfig;
use crate::cursor::{CursorIcon, CursorManager};
use crate::error::ControllerError;
use crate::keymap::{KeyBindingTable, KeyCode, default_bindings};
use crate::viewer::{Viewer, ViewportHost};

/// Turns viewport input into viewer operations.
///
/// `V` is the 3D viewer and `H` the widget hosting it. The host is owned for the
/// whole lifetime of the controller; viewers come and go with
/// [`attach`](Self::attach) and [`detach`](Self::detach).
pub struct InteractionController<V: Viewer, H: ViewportHost> {
    host: H,
    config: ControllerConfig,
    viewer: Option<V>,
    drag: DragState,
    mode: InteractionMode,
    cursors: Option<CursorManager<H::Cursor>>,
    keymap: KeyBindingTable,
    size: Size,
    centre_point: Point,
    centre_rect: Rect,
    broadcaster: Rc<SelectionBroadcaster<V::Shape>>,
    history: Option<SelectionHistory<V::Shape>>,
}

impl<V: Viewer, H: ViewportHost> InteractionController<V, H> {
    /// Creates an unattached controller.
    pub fn new(host: H, config: ControllerConfig) -> Self {
        let history = config
            .record_selection_history
            .then(SelectionHistory::new);
        Self {
            host,
            config,
            viewer: None,
            drag: DragState::default(),
            mode: InteractionMode::Idle,
            cursors: None,
            keymap: KeyBindingTable::new(),
            size: Size::ZERO,
            centre_point: Point::ORIGIN,
            centre_rect: Rect::ZERO,
            broadcaster: Rc::new(SelectionBroadcaster::new()),
            history,
        }
    }

    /// Attaches `viewer` to a widget of `size` and prepares it for interaction.
    ///
    /// The viewer receives the configured projection, display mode, trihedron and
    /// background. Key bindings and cursors are set up afresh.
    ///
    /// If a viewer is already attached, `viewer` is dropped, any gesture in
    /// progress is abandoned and [`ControllerError::AlreadyAttached`] is returned.
    /// The attached viewer, size and bindings are kept.
    pub fn attach(&mut self, mut viewer: V, size: Size) -> Result<(), ControllerError> {
        if self.viewer.is_some() {
            log::debug!("attach ignored: a viewer is already attached");
            self.finish_gesture();
            return Err(ControllerError::AlreadyAttached);
        }

        viewer.set_projection(self.config.projection);
        if self.config.shaded_on_attach {
            viewer.set_shaded();
        }
        if self.config.show_trihedron {
            viewer.display_trihedron();
        }
        if let Some((top, bottom)) = self.config.background_gradient {
            viewer.set_background_gradient(top, bottom);
        }

        self.keymap.reset();
        self.keymap.build(
            default_bindings()
                .into_iter()
                .chain(self.config.extra_bindings.iter().copied()),
        )?;
        self.cursors = Some(CursorManager::load(&mut self.host));
        self.set_size(size);
        self.drag.end();
        self.mode = InteractionMode::Idle;
        self.viewer = Some(viewer);
        log::debug!("viewer attached at {}x{}", size.width, size.height);
        Ok(())
    }

    /// Detaches and returns the viewer, if one was attached.
    ///
    /// Gesture state, key bindings and cursor resources are dropped; a later
    /// [`attach`](Self::attach) rebuilds them.
    pub fn detach(&mut self) -> Option<V> {
        let viewer = self.viewer.take()?;
        self.drag.end();
        self.mode = InteractionMode::Idle;
        self.keymap.reset();
        self.cursors = None;
        log::debug!("viewer detached");
        Some(viewer)
    }

    /// A button was pressed at `pos`.
    pub fn on_pointer_down(
        &mut self,
        pos: Point,
        button: PointerButton,
    ) -> Result<(), ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("on_pointer_down"));
        };
        self.host.request_focus();
        self.drag.start(pos);
        if button == PointerButton::Primary {
            viewer.begin_rotation(pos);
        }
        Ok(())
    }

    /// The pointer moved to `pos` with `buttons` held.
    pub fn on_pointer_move(
        &mut self,
        pos: Point,
        buttons: PointerButtons,
        modifiers: Modifiers,
    ) -> Result<(), ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("on_pointer_move"));
        };

        let mode = InteractionMode::resolve(buttons, modifiers);
        if mode != self.mode {
            log::trace!("mode {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
        // The press may have happened outside the widget.
        if !buttons.is_empty() && !self.drag.is_active() {
            self.drag.start(pos);
        }
        if !mode.is_area_draw() && self.drag.clear_box() {
            self.host.request_redraw();
        }

        match mode {
            InteractionMode::Rotate => {
                viewer.rotate(pos);
            }
            InteractionMode::DynamicZoom => {
                viewer.repaint();
                if let Some(anchor) = self.drag.anchor() {
                    viewer.dynamic_zoom(abs(anchor), abs(pos));
                    self.drag.advance(pos);
                }
            }
            InteractionMode::Pan => {
                if let Some(delta) = self.drag.advance(pos) {
                    viewer.pan(delta.x, -delta.y);
                }
            }
            InteractionMode::AreaZoomDraw | InteractionMode::AreaSelectDraw => {
                if self.drag.extend_box(pos, self.config.area_tolerance) {
                    self.host.request_redraw();
                }
            }
            InteractionMode::Idle => {
                viewer.move_to(pos);
            }
        }

        if let Some(cursors) = self.cursors.as_mut() {
            cursors.set_mode(mode, &mut self.host);
        }
        Ok(())
    }

    /// A button was released at `pos`.
    ///
    /// Finishes the gesture resolved by the last move: an area pick, an area
    /// zoom, or a click pick with the primary button.
    pub fn on_pointer_up(
        &mut self,
        pos: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Result<(), ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("on_pointer_up"));
        };
        let rect = self.drag.rect();

        match (self.mode, rect) {
            (InteractionMode::AreaSelectDraw, Some(area)) => {
                log::debug!("area select {area:?}");
                if let Some(result) = picked("pick_area", viewer.pick_area(area)) {
                    self.publish(&result);
                }
            }
            (InteractionMode::AreaZoomDraw, Some(area)) if button == PointerButton::Secondary => {
                log::debug!("area zoom {area:?}");
                viewer.zoom_to_area(area);
            }
            // A shift-drag that never left the tolerance is a shift-click.
            _ if button == PointerButton::Primary => {
                if modifiers.is_shift_only() {
                    if let Some(result) = picked("pick_additive", viewer.pick_additive(pos)) {
                        log::debug!("added {} handle(s) to the selection", result.len());
                    }
                } else if let Some(result) = picked("pick", viewer.pick(pos)) {
                    self.publish(&result);
                }
            }
            _ => {}
        }

        self.finish_gesture();
        Ok(())
    }

    /// The wheel turned. Positive deltas zoom in.
    pub fn on_wheel(&mut self, delta: f64) -> Result<(), ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("on_wheel"));
        };
        let factor = if delta > 0.0 {
            self.config.wheel_zoom_in
        } else {
            self.config.wheel_zoom_out
        };
        viewer.repaint();
        viewer.zoom_by_factor(factor);
        Ok(())
    }

    /// A key was pressed.
    ///
    /// Unbound keys are logged and otherwise ignored. Fails with
    /// [`KeymapError::NotBuilt`](crate::KeymapError::NotBuilt) until a viewer is
    /// attached.
    pub fn on_key_press(&mut self, code: KeyCode) -> Result<(), ControllerError> {
        let command = self.keymap.lookup(code)?;
        match (command, self.viewer.as_mut()) {
            (Some(command), Some(viewer)) => {
                log::trace!("key {code} -> {command:?}");
                command.apply(viewer, &mut self.host);
            }
            (Some(_), None) => {}
            (None, _) => match code.printable() {
                Some(c) => log::info!("unbound printable key {c:?}"),
                None => log::info!("unbound key {:#x}", code.0),
            },
        }
        Ok(())
    }

    /// The widget was resized. Ignored while no viewer is attached.
    pub fn on_resize(&mut self, size: Size) {
        if self.viewer.is_none() {
            return;
        }
        self.set_size(size);
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.resize(size);
        }
    }

    /// The widget gained keyboard focus.
    pub fn on_focus_in(&mut self) {
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.repaint();
        }
    }

    /// The widget lost keyboard focus. Any gesture in progress is abandoned.
    pub fn on_focus_out(&mut self) {
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.repaint();
            self.cancel_gesture();
        }
    }

    /// The widget is being painted.
    ///
    /// While a rubber band is visible the viewer is repainted underneath it and
    /// the rectangle is returned; the host strokes it with
    /// [`ControllerConfig::rubber_band`].
    pub fn on_paint(&mut self) -> Option<Rect> {
        let viewer = self.viewer.as_mut()?;
        let band = self.drag.rect()?;
        viewer.repaint();
        Some(band)
    }

    /// The rubber band currently visible, if any.
    #[must_use]
    pub fn rubber_band(&self) -> Option<Rect> {
        self.drag.rect()
    }

    /// Abandons the gesture in progress without telling the viewer.
    pub fn cancel_gesture(&mut self) {
        if self.drag.is_active() || !self.mode.is_idle() {
            log::trace!("gesture cancelled in mode {}", self.mode.name());
        }
        self.finish_gesture();
    }

    /// Picks everything inside the widget and publishes it.
    pub fn select_all_visible(&mut self) -> Result<SelectionResult<V::Shape>, ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("select_all_visible"));
        };
        let area = self.size.to_rect();
        let result = picked("pick_area", viewer.pick_area(area));
        Ok(self.publish_picked(result))
    }

    /// Picks whatever lies at the widget centre and publishes it.
    pub fn select_at_centre(&mut self) -> Result<SelectionResult<V::Shape>, ControllerError> {
        let Some(viewer) = self.viewer.as_mut() else {
            return Err(self.reject("select_at_centre"));
        };
        let result = picked("pick_at_point", viewer.pick_at_point(self.centre_point));
        Ok(self.publish_picked(result))
    }

    /// The mode resolved by the last move, or `Idle` between gestures.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// The cursor icon last shown. `Arrow` while detached.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.cursors
            .as_ref()
            .map_or(CursorIcon::Arrow, CursorManager::current)
    }

    /// Returns `true` while a viewer is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.viewer.is_some()
    }

    /// The attached viewer.
    #[must_use]
    pub fn viewer(&self) -> Option<&V> {
        self.viewer.as_ref()
    }

    /// The attached viewer, mutably.
    pub fn viewer_mut(&mut self) -> Option<&mut V> {
        self.viewer.as_mut()
    }

    /// The host widget.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host widget, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The widget centre, rounded down to whole pixels.
    #[must_use]
    pub fn centre_point(&self) -> Point {
        self.centre_point
    }

    /// The square around [`centre_point`](Self::centre_point).
    #[must_use]
    pub fn centre_rect(&self) -> Rect {
        self.centre_rect
    }

    /// The channel selections are published on.
    ///
    /// Subscribers may keep a clone of the `Rc` to manage their subscription
    /// from inside a callback.
    #[must_use]
    pub fn broadcaster(&self) -> &Rc<SelectionBroadcaster<V::Shape>> {
        &self.broadcaster
    }

    /// Everything published so far, when
    /// [`ControllerConfig::record_selection_history`] is set.
    #[must_use]
    pub fn selection_history(&self) -> Option<&SelectionHistory<V::Shape>> {
        self.history.as_ref()
    }

    /// The configuration this controller was created with.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn reject(&mut self, operation: &'static str) -> ControllerError {
        log::debug!("{operation} ignored: no viewer attached");
        self.drag.end();
        self.mode = InteractionMode::Idle;
        ControllerError::NotReady { operation }
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
        self.centre_point = Point::new((size.width / 2.0).floor(), (size.height / 2.0).floor());
        let side = 2.0 * self.config.centre_half_extent;
        self.centre_rect = Rect::from_center_size(self.centre_point, Size::new(side, side));
    }

    fn finish_gesture(&mut self) {
        let had_box = self.drag.has_box();
        self.drag.end();
        if !self.mode.is_idle() {
            log::trace!("mode {} -> idle", self.mode.name());
        }
        self.mode = InteractionMode::Idle;
        if let Some(cursors) = self.cursors.as_mut() {
            cursors.set_icon(CursorIcon::Arrow, &mut self.host);
        }
        if had_box {
            self.host.request_redraw();
        }
    }

    fn publish(&self, result: &SelectionResult<V::Shape>) {
        if let Some(history) = &self.history {
            history.record(result);
        }
        self.broadcaster.publish(result);
    }

    fn publish_picked(
        &self,
        result: Option<SelectionResult<V::Shape>>,
    ) -> SelectionResult<V::Shape> {
        match result {
            Some(result) => {
                self.publish(&result);
                result
            }
            None => SelectionResult::empty(),
        }
    }
}

impl<V: Viewer, H: ViewportHost> fmt::Debug for InteractionController<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("attached", &self.viewer.is_some())
            .field("mode", &self.mode)
            .field("drag", &self.drag)
            .field("cursor", &self.cursor())
            .field("keymap", &self.keymap)
            .field("size", &self.size)
            .field("centre_point", &self.centre_point)
            .field("subscribers", &self.broadcaster.len())
            .finish_non_exhaustive()
    }
}

/// Converts a pick outcome into a result, logging and discarding failures.
fn picked<S, E: core::error::Error>(
    kind: &str,
    outcome: Result<Vec<S>, E>,
) -> Option<SelectionResult<S>> {
    match outcome {
        Ok(items) => {
            log::debug!("{kind} returned {} handle(s)", items.len());
            Some(SelectionResult::from(items))
        }
        Err(err) => {
            log::debug!("{kind} failed: {err}");
            None
        }
    }
}

fn abs(p: Point) -> Point {
    Point::new(p.x.abs(), p.y.abs())
}
