// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor feedback for the current interaction mode.

use core::fmt;

use orrery_event_state::mode::InteractionMode;

use crate::viewer::ViewportHost;

/// Symbolic cursor shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    /// The ordinary pointer.
    #[default]
    Arrow,
    /// Panning hand.
    Pan,
    /// Orbit.
    Rotate,
    /// Continuous zoom.
    Zoom,
    /// Rubber band zoom.
    ZoomArea,
}

impl CursorIcon {
    /// Every icon, in load order.
    pub const ALL: [Self; 5] = [
        Self::Arrow,
        Self::Pan,
        Self::Rotate,
        Self::Zoom,
        Self::ZoomArea,
    ];

    /// The icon shown while `mode` is active.
    #[must_use]
    pub const fn for_mode(mode: InteractionMode) -> Self {
        match mode {
            InteractionMode::Rotate => Self::Rotate,
            InteractionMode::Pan => Self::Pan,
            InteractionMode::DynamicZoom => Self::Zoom,
            InteractionMode::AreaZoomDraw => Self::ZoomArea,
            InteractionMode::AreaSelectDraw | InteractionMode::Idle => Self::Arrow,
        }
    }

    /// The conventional resource name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Pan => "pan",
            Self::Rotate => "rotate",
            Self::Zoom => "zoom",
            Self::ZoomArea => "zoom-area",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Arrow => 0,
            Self::Pan => 1,
            Self::Rotate => 2,
            Self::Zoom => 3,
            Self::ZoomArea => 4,
        }
    }
}

impl fmt::Display for CursorIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loaded cursor resources and the icon last shown.
///
/// The manager only talks to the host when the icon actually changes, so it is
/// safe to call [`CursorManager::set_mode`] on every move event.
pub struct CursorManager<C> {
    resources: [Option<C>; 5],
    current: CursorIcon,
}

impl<C> CursorManager<C> {
    /// Asks `host` for every icon once.
    ///
    /// Nothing is applied; the manager starts out assuming the arrow is showing.
    pub fn load<H>(host: &mut H) -> Self
    where
        H: ViewportHost<Cursor = C> + ?Sized,
    {
        let resources = CursorIcon::ALL.map(|icon| {
            let resource = host.load_cursor(icon);
            if resource.is_none() {
                log::debug!("no cursor resource for {icon}; the platform default will be used");
            }
            resource
        });
        Self {
            resources,
            current: CursorIcon::Arrow,
        }
    }

    /// Shows the icon for `mode`. Returns `true` if the host was called.
    pub fn set_mode<H>(&mut self, mode: InteractionMode, host: &mut H) -> bool
    where
        H: ViewportHost<Cursor = C> + ?Sized,
    {
        self.set_icon(CursorIcon::for_mode(mode), host)
    }

    /// Shows `icon`. Returns `true` if the host was called.
    pub fn set_icon<H>(&mut self, icon: CursorIcon, host: &mut H) -> bool
    where
        H: ViewportHost<Cursor = C> + ?Sized,
    {
        if icon == self.current {
            return false;
        }
        match &self.resources[icon.index()] {
            Some(resource) => host.apply_cursor(resource),
            None => host.restore_cursor(),
        }
        log::trace!("cursor {} -> {icon}", self.current);
        self.current = icon;
        true
    }

    /// The icon last shown.
    #[must_use]
    pub fn current(&self) -> CursorIcon {
        self.current
    }

    /// Returns `true` if the host supplied a resource for `icon`.
    #[must_use]
    pub fn has_resource(&self, icon: CursorIcon) -> bool {
        self.resources[icon.index()].is_some()
    }
}

impl<C> fmt::Debug for CursorManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaded: Vec<CursorIcon> = CursorIcon::ALL
            .into_iter()
            .filter(|icon| self.has_resource(*icon))
            .collect();
        f.debug_struct("CursorManager")
            .field("loaded", &loaded)
            .field("current", &self.current)
            .finish()
    }
}
