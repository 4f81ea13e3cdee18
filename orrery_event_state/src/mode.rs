// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction modes and the table that resolves them from a move event.

use crate::buttons::{Modifiers, PointerButtons};

/// The current interpretation of pointer input.
///
/// A mode is resolved afresh on every move event by [`InteractionMode::resolve`];
/// it is never carried across events that change the held buttons or modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    /// Hovering, or a button combination with no meaning.
    #[default]
    Idle,
    /// Orbit the camera.
    Rotate,
    /// Translate the camera in the view plane.
    Pan,
    /// Zoom continuously with vertical/horizontal drag.
    DynamicZoom,
    /// Draw a rubber band to zoom into.
    AreaZoomDraw,
    /// Draw a rubber band to pick inside.
    AreaSelectDraw,
}

impl InteractionMode {
    /// Resolves the mode for a move event.
    ///
    /// Buttons are matched exactly and rows are tried in order; the first match wins:
    ///
    /// | held      | modifiers         | mode             |
    /// |-----------|-------------------|------------------|
    /// | primary   | not shift-only    | `Rotate`         |
    /// | secondary | not shift-only    | `DynamicZoom`    |
    /// | middle    | any               | `Pan`            |
    /// | secondary | shift-only        | `AreaZoomDraw`   |
    /// | primary   | shift-only        | `AreaSelectDraw` |
    /// | otherwise |                   | `Idle`           |
    ///
    /// ```
    /// use orrery_event_state::buttons::{Modifiers, PointerButtons};
    /// use orrery_event_state::mode::InteractionMode;
    ///
    /// assert_eq!(
    ///     InteractionMode::resolve(PointerButtons::MIDDLE, Modifiers::SHIFT),
    ///     InteractionMode::Pan,
    /// );
    /// assert_eq!(
    ///     InteractionMode::resolve(PointerButtons::empty(), Modifiers::SHIFT),
    ///     InteractionMode::Idle,
    /// );
    /// ```
    #[must_use]
    pub fn resolve(buttons: PointerButtons, modifiers: Modifiers) -> Self {
        let shift = modifiers.is_shift_only();
        if buttons == PointerButtons::PRIMARY && !shift {
            Self::Rotate
        } else if buttons == PointerButtons::SECONDARY && !shift {
            Self::DynamicZoom
        } else if buttons == PointerButtons::MIDDLE {
            Self::Pan
        } else if buttons == PointerButtons::SECONDARY {
            Self::AreaZoomDraw
        } else if buttons == PointerButtons::PRIMARY {
            Self::AreaSelectDraw
        } else {
            Self::Idle
        }
    }

    /// Returns `true` for the two rubber band modes.
    #[must_use]
    pub const fn is_area_draw(self) -> bool {
        matches!(self, Self::AreaZoomDraw | Self::AreaSelectDraw)
    }

    /// Returns `true` if no gesture is being interpreted.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// A short lowercase name, used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Rotate => "rotate",
            Self::Pan => "pan",
            Self::DynamicZoom => "dynamic-zoom",
            Self::AreaZoomDraw => "area-zoom",
            Self::AreaSelectDraw => "area-select",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Modifiers = Modifiers::empty();

    #[test]
    fn plain_buttons() {
        use InteractionMode::*;
        assert_eq!(InteractionMode::resolve(PointerButtons::PRIMARY, NONE), Rotate);
        assert_eq!(
            InteractionMode::resolve(PointerButtons::SECONDARY, NONE),
            DynamicZoom
        );
        assert_eq!(InteractionMode::resolve(PointerButtons::MIDDLE, NONE), Pan);
    }

    #[test]
    fn shift_switches_to_box_drawing() {
        use InteractionMode::*;
        let shift = Modifiers::SHIFT;
        assert_eq!(
            InteractionMode::resolve(PointerButtons::PRIMARY, shift),
            AreaSelectDraw
        );
        assert_eq!(
            InteractionMode::resolve(PointerButtons::SECONDARY, shift),
            AreaZoomDraw
        );
        // Middle ignores modifiers.
        assert_eq!(InteractionMode::resolve(PointerButtons::MIDDLE, shift), Pan);
    }

    #[test]
    fn shift_with_other_modifiers_keeps_plain_meaning() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert_eq!(
            InteractionMode::resolve(PointerButtons::PRIMARY, mods),
            InteractionMode::Rotate
        );
        assert_eq!(
            InteractionMode::resolve(PointerButtons::PRIMARY, Modifiers::ALT),
            InteractionMode::Rotate
        );
    }

    #[test]
    fn no_buttons_is_always_idle() {
        for mods in [
            NONE,
            Modifiers::SHIFT,
            Modifiers::CONTROL,
            Modifiers::all(),
        ] {
            assert_eq!(
                InteractionMode::resolve(PointerButtons::empty(), mods),
                InteractionMode::Idle
            );
        }
    }

    #[test]
    fn chords_are_idle() {
        let chord = PointerButtons::PRIMARY | PointerButtons::SECONDARY;
        assert_eq!(InteractionMode::resolve(chord, NONE), InteractionMode::Idle);
        assert_eq!(
            InteractionMode::resolve(PointerButtons::all(), Modifiers::SHIFT),
            InteractionMode::Idle
        );
    }

    #[test]
    fn area_draw_predicate() {
        assert!(InteractionMode::AreaZoomDraw.is_area_draw());
        assert!(InteractionMode::AreaSelectDraw.is_area_draw());
        assert!(!InteractionMode::Pan.is_area_draw());
        assert!(InteractionMode::default().is_idle());
    }
}
