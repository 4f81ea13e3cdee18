// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer buttons and keyboard modifiers as delivered by the host toolkit.

/// The button whose state changed in a pointer down or up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel button.
    Middle,
}

impl PointerButton {
    /// Returns the single-button set for this button.
    #[must_use]
    pub const fn mask(self) -> PointerButtons {
        match self {
            Self::Primary => PointerButtons::PRIMARY,
            Self::Secondary => PointerButtons::SECONDARY,
            Self::Middle => PointerButtons::MIDDLE,
        }
    }
}

bitflags::bitflags! {
    /// Buttons held down while the pointer moves.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointerButtons: u8 {
        /// Primary (left) button.
        const PRIMARY   = 0b0000_0001;
        /// Secondary (right) button.
        const SECONDARY = 0b0000_0010;
        /// Middle button.
        const MIDDLE    = 0b0000_0100;
    }
}

impl From<PointerButton> for PointerButtons {
    fn from(button: PointerButton) -> Self {
        button.mask()
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Super.
        const META    = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if shift is the only modifier held.
    ///
    /// Box drawing and additive picking only trigger on a lone shift; shift
    /// combined with other modifiers keeps the plain-button meaning.
    #[must_use]
    pub fn is_shift_only(self) -> bool {
        self == Self::SHIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_masks_are_distinct() {
        let all = PointerButton::Primary.mask()
            | PointerButton::Secondary.mask()
            | PointerButton::Middle.mask();
        assert_eq!(all, PointerButtons::all());
        assert_eq!(
            PointerButtons::from(PointerButton::Middle),
            PointerButtons::MIDDLE
        );
    }

    #[test]
    fn shift_only_rejects_combinations() {
        assert!(Modifiers::SHIFT.is_shift_only());
        assert!(!(Modifiers::SHIFT | Modifiers::CONTROL).is_shift_only());
        assert!(!Modifiers::empty().is_shift_only());
    }

    #[test]
    fn default_sets_are_empty() {
        assert!(PointerButtons::default().is_empty());
        assert!(Modifiers::default().is_empty());
    }
}
