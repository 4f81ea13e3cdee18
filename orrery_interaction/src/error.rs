// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors from a [`KeyBindingTable`](crate::KeyBindingTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// The table was used before it was built.
    #[error("key bindings have not been built yet")]
    NotBuilt,
    /// The table was built twice.
    #[error("key bindings are already built")]
    AlreadyBuilt,
}

/// Errors from an [`InteractionController`](crate::InteractionController).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// An event arrived while no viewer is attached.
    #[error("{operation} requires an attached viewer")]
    NotReady {
        /// The rejected entry point.
        operation: &'static str,
    },
    /// `attach` was called while a viewer is already attached.
    ///
    /// This is the attach-time form of [`ControllerError::NotReady`]: the
    /// controller is not ready to accept a viewer. Like every rejected call it
    /// leaves the controller idle with no gesture in progress. Use
    /// [`ControllerError::is_not_ready`] to match both.
    #[error("a viewer is already attached")]
    AlreadyAttached,
    /// A key binding lookup failed.
    #[error(transparent)]
    Keymap(#[from] KeymapError),
}

impl ControllerError {
    /// Returns `true` if the controller was not in a state to accept the call,
    /// either because no viewer is attached or because one already is.
    #[must_use]
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. } | Self::AlreadyAttached)
    }
}
