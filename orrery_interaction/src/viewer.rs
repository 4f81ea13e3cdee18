// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two collaborators an [`InteractionController`](crate::InteractionController)
//! drives: the 3D viewer and the host widget.
//!
//! Neither trait does any interpretation of input. The controller decides *what*
//! happens; implementors only carry it out.

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::cursor::CursorIcon;

/// Camera projection applied when a viewer is attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Parallel projection.
    #[default]
    Orthographic,
    /// Perspective projection.
    Perspective,
}

/// A 3D viewer: camera, picking and display toggles.
///
/// Positions are widget-local device pixels. Picks return the viewer's own shape
/// handles in the order the viewer reports them.
///
/// The display toggles at the bottom of the trait are the targets of key bindings
/// (see [`ViewerCommand`](crate::ViewerCommand)). The provided methods default to
/// doing nothing so that minimal viewers stay minimal.
pub trait Viewer {
    /// Opaque handle to a picked object.
    type Shape: Clone + 'static;
    /// Error returned by a failed pick.
    type Error: core::error::Error;

    /// Starts an orbit around the view centre from `pos`.
    fn begin_rotation(&mut self, pos: Point);
    /// Continues the orbit started by [`Viewer::begin_rotation`].
    fn rotate(&mut self, pos: Point);
    /// Translates the view by a device-pixel offset. Positive `dy` moves up.
    fn pan(&mut self, dx: f64, dy: f64);
    /// Zooms by the drag from `from` to `to`.
    fn dynamic_zoom(&mut self, from: Point, to: Point);
    /// Multiplies the current zoom by `factor`.
    fn zoom_by_factor(&mut self, factor: f64);
    /// Fits the view to a device-space rectangle.
    fn zoom_to_area(&mut self, area: Rect);

    /// Replaces the viewer's selection with whatever is under `pos`.
    fn pick(&mut self, pos: Point) -> Result<Vec<Self::Shape>, Self::Error>;
    /// Adds whatever is under `pos` to the viewer's selection.
    fn pick_additive(&mut self, pos: Point) -> Result<Vec<Self::Shape>, Self::Error>;
    /// Replaces the viewer's selection with everything inside `area`.
    fn pick_area(&mut self, area: Rect) -> Result<Vec<Self::Shape>, Self::Error>;
    /// Returns what lies under `pos` without hover side effects.
    fn pick_at_point(&mut self, pos: Point) -> Result<Vec<Self::Shape>, Self::Error>;

    /// Hover feedback for a pointer at `pos` with no buttons held.
    fn move_to(&mut self, pos: Point);
    /// Redraws the scene.
    fn repaint(&mut self);
    /// The host widget changed size.
    fn resize(&mut self, size: Size);

    /// Switches to wireframe display.
    fn set_wireframe(&mut self);
    /// Switches to shaded display.
    fn set_shaded(&mut self);
    /// Turns anti-aliasing on.
    fn enable_anti_aliasing(&mut self);
    /// Turns anti-aliasing off.
    fn disable_anti_aliasing(&mut self);
    /// Switches to hidden line removal.
    fn set_hidden_line_removal(&mut self);
    /// Fits the whole scene into the view.
    fn fit_all(&mut self);
    /// Cycles the selection granularity.
    fn set_selection_mode(&mut self);
    /// Isometric view.
    fn view_iso(&mut self);
    /// Top view.
    fn view_above(&mut self);
    /// Rotates the camera so that the model's up axis points up.
    fn up(&mut self);

    /// Applies the camera projection.
    fn set_projection(&mut self, projection: Projection) {
        let _ = projection;
    }
    /// Shows the orientation trihedron.
    fn display_trihedron(&mut self) {}
    /// Paints the background as a vertical gradient.
    fn set_background_gradient(&mut self, top: Color, bottom: Color) {
        let _ = (top, bottom);
    }
    /// Dumps the camera parameters somewhere useful.
    fn print_camera(&mut self) {}
    /// Restores a camera previously captured by [`Viewer::print_camera`].
    fn set_camera(&mut self) {}
}

/// The widget hosting a viewer.
///
/// Cursor resources are host-specific; the controller only ever refers to them
/// through [`ViewportHost::Cursor`].
pub trait ViewportHost {
    /// A loaded cursor resource.
    type Cursor;

    /// Loads the resource for `icon`, if the host has one.
    fn load_cursor(&mut self, icon: CursorIcon) -> Option<Self::Cursor>;
    /// Shows `cursor` over the widget.
    fn apply_cursor(&mut self, cursor: &Self::Cursor);
    /// Shows the platform default cursor.
    fn restore_cursor(&mut self);

    /// Schedules a paint of the widget.
    fn request_redraw(&mut self) {}
    /// Gives the widget keyboard focus.
    fn request_focus(&mut self) {}
    /// Closes the widget's window.
    fn request_close(&mut self) {}
}
