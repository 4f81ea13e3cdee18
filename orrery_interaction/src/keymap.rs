// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key codes, viewer commands and the table binding one to the other.

use core::fmt;

use hashbrown::HashMap;

use crate::error::KeymapError;
use crate::viewer::{Viewer, ViewportHost};

/// A platform key code.
///
/// Printable ASCII keys use their character value, with letters in upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// The code for a printable key. Letters are folded to upper case.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self(c.to_ascii_uppercase() as u32)
    }

    /// Returns the character for printable ASCII codes (`0x20..=0x7E`).
    #[must_use]
    pub fn printable(self) -> Option<char> {
        if (0x20..=0x7E).contains(&self.0) {
            char::from_u32(self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.printable() {
            Some(c) => write!(f, "'{c}'"),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

/// A zero-argument command a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewerCommand {
    /// [`Viewer::set_wireframe`].
    Wireframe,
    /// [`Viewer::set_shaded`].
    Shaded,
    /// [`Viewer::enable_anti_aliasing`].
    EnableAntiAliasing,
    /// [`Viewer::disable_anti_aliasing`].
    DisableAntiAliasing,
    /// [`Viewer::set_hidden_line_removal`].
    HiddenLineRemoval,
    /// [`Viewer::fit_all`].
    FitAll,
    /// [`Viewer::set_selection_mode`].
    SelectionMode,
    /// [`ViewportHost::request_close`].
    Close,
    /// [`Viewer::view_iso`].
    ViewIso,
    /// [`Viewer::view_above`].
    ViewAbove,
    /// [`Viewer::up`].
    Up,
    /// [`Viewer::print_camera`].
    PrintCamera,
    /// [`Viewer::set_camera`].
    SetCamera,
}

impl ViewerCommand {
    /// Runs the command.
    pub fn apply<V, H>(self, viewer: &mut V, host: &mut H)
    where
        V: Viewer + ?Sized,
        H: ViewportHost + ?Sized,
    {
        match self {
            Self::Wireframe => viewer.set_wireframe(),
            Self::Shaded => viewer.set_shaded(),
            Self::EnableAntiAliasing => viewer.enable_anti_aliasing(),
            Self::DisableAntiAliasing => viewer.disable_anti_aliasing(),
            Self::HiddenLineRemoval => viewer.set_hidden_line_removal(),
            Self::FitAll => viewer.fit_all(),
            Self::SelectionMode => viewer.set_selection_mode(),
            Self::Close => host.request_close(),
            Self::ViewIso => viewer.view_iso(),
            Self::ViewAbove => viewer.view_above(),
            Self::Up => viewer.up(),
            Self::PrintCamera => viewer.print_camera(),
            Self::SetCamera => viewer.set_camera(),
        }
    }
}

/// The stock bindings installed on attach.
///
/// | key | command |
/// |-----|---------|
/// | W | [`ViewerCommand::Wireframe`] |
/// | S | [`ViewerCommand::Shaded`] |
/// | A | [`ViewerCommand::EnableAntiAliasing`] |
/// | B | [`ViewerCommand::DisableAntiAliasing`] |
/// | H | [`ViewerCommand::HiddenLineRemoval`] |
/// | F | [`ViewerCommand::FitAll`] |
/// | G | [`ViewerCommand::SelectionMode`] |
/// | Q | [`ViewerCommand::Close`] |
/// | 1 | [`ViewerCommand::ViewIso`] |
/// | 2 | [`ViewerCommand::ViewAbove`] |
/// | 3 | [`ViewerCommand::PrintCamera`] |
/// | 4 | [`ViewerCommand::SetCamera`] |
/// | 6 | [`ViewerCommand::Up`] |
#[must_use]
pub fn default_bindings() -> [(KeyCode, ViewerCommand); 13] {
    use ViewerCommand::*;
    [
        (KeyCode::from_char('W'), Wireframe),
        (KeyCode::from_char('S'), Shaded),
        (KeyCode::from_char('A'), EnableAntiAliasing),
        (KeyCode::from_char('B'), DisableAntiAliasing),
        (KeyCode::from_char('H'), HiddenLineRemoval),
        (KeyCode::from_char('F'), FitAll),
        (KeyCode::from_char('G'), SelectionMode),
        (KeyCode::from_char('Q'), Close),
        (KeyCode::from_char('1'), ViewIso),
        (KeyCode::from_char('2'), ViewAbove),
        (KeyCode::from_char('3'), PrintCamera),
        (KeyCode::from_char('4'), SetCamera),
        (KeyCode::from_char('6'), Up),
    ]
}

/// Maps key codes to viewer commands.
///
/// The table is built exactly once and is read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct KeyBindingTable {
    bindings: Option<HashMap<KeyCode, ViewerCommand>>,
}

impl KeyBindingTable {
    /// Creates an unbuilt table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the table. Later entries for the same key win.
    pub fn build<I>(&mut self, bindings: I) -> Result<(), KeymapError>
    where
        I: IntoIterator<Item = (KeyCode, ViewerCommand)>,
    {
        if self.bindings.is_some() {
            return Err(KeymapError::AlreadyBuilt);
        }
        let map: HashMap<KeyCode, ViewerCommand> = bindings.into_iter().collect();
        log::trace!("built key bindings for {} key(s)", map.len());
        self.bindings = Some(map);
        Ok(())
    }

    /// Returns the command bound to `code`.
    pub fn lookup(&self, code: KeyCode) -> Result<Option<ViewerCommand>, KeymapError> {
        let bindings = self.bindings.as_ref().ok_or(KeymapError::NotBuilt)?;
        Ok(bindings.get(&code).copied())
    }

    /// Returns `true` once [`KeyBindingTable::build`] has succeeded.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.bindings.is_some()
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.as_ref().map_or(0, HashMap::len)
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the table to its unbuilt state.
    pub fn reset(&mut self) {
        self.bindings = None;
    }
}
