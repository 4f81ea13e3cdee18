// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use orrery_event_state::drag::AREA_TOLERANCE;
use peniko::Color;
use peniko::color::palette;

use crate::keymap::{KeyCode, ViewerCommand};
use crate::viewer::Projection;

/// Stroke used by hosts to draw the rubber band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RubberBandStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in device pixels.
    pub width: f64,
}

impl Default for RubberBandStyle {
    fn default() -> Self {
        Self {
            color: palette::css::BLACK,
            width: 2.0,
        }
    }
}

/// Settings for an [`InteractionController`](crate::InteractionController).
///
/// The first four fields describe how a viewer is prepared when it is attached.
/// The rest tune the gestures.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Camera projection applied on attach.
    pub projection: Projection,
    /// Show the orientation trihedron on attach.
    pub show_trihedron: bool,
    /// Switch to shaded display on attach.
    pub shaded_on_attach: bool,
    /// Background gradient, top then bottom. `None` leaves the viewer's background alone.
    pub background_gradient: Option<(Color, Color)>,
    /// Rubber bands no larger than this on both axes are not drawn.
    pub area_tolerance: f64,
    /// Half the side of the square around the widget centre.
    pub centre_half_extent: f64,
    /// Zoom factor for a positive wheel delta.
    pub wheel_zoom_in: f64,
    /// Zoom factor for any other wheel delta.
    pub wheel_zoom_out: f64,
    /// How hosts should stroke the rubber band.
    pub rubber_band: RubberBandStyle,
    /// Bindings added after the defaults. An entry for an already bound key replaces it.
    pub extra_bindings: Vec<(KeyCode, ViewerCommand)>,
    /// Accumulate every published selection in a
    /// [`SelectionHistory`](orrery_selection::SelectionHistory).
    pub record_selection_history: bool,
}

impl ControllerConfig {
    /// The default background's top color.
    pub const GRADIENT_TOP: Color = Color::from_rgb8(206, 215, 222);
    /// The default background's bottom color.
    pub const GRADIENT_BOTTOM: Color = Color::from_rgb8(128, 128, 128);

    /// Sets the projection.
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Sets the background gradient; `None` disables it.
    #[must_use]
    pub fn with_background_gradient(mut self, gradient: Option<(Color, Color)>) -> Self {
        self.background_gradient = gradient;
        self
    }

    /// Sets the rubber band tolerance.
    #[must_use]
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance;
        self
    }

    /// Sets the wheel zoom factors.
    #[must_use]
    pub fn with_wheel_zoom(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.wheel_zoom_in = zoom_in;
        self.wheel_zoom_out = zoom_out;
        self
    }

    /// Adds a key binding on top of the defaults.
    #[must_use]
    pub fn with_binding(mut self, code: KeyCode, command: ViewerCommand) -> Self {
        self.extra_bindings.push((code, command));
        self
    }

    /// Enables or disables the selection history.
    #[must_use]
    pub fn with_selection_history(mut self, record: bool) -> Self {
        self.record_selection_history = record;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            projection: Projection::Orthographic,
            show_trihedron: true,
            shaded_on_attach: true,
            background_gradient: Some((Self::GRADIENT_TOP, Self::GRADIENT_BOTTOM)),
            area_tolerance: AREA_TOLERANCE,
            centre_half_extent: 10.0,
            wheel_zoom_in: 2.0,
            wheel_zoom_out: 0.5,
            rubber_band: RubberBandStyle::default(),
            extra_bindings: Vec::new(),
            record_selection_history: true,
        }
    }
}
