// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handles returned by a single pick.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// The ordered shape handles returned by one pick.
///
/// Handles are opaque to this crate. They usually reference renderer-owned
/// objects, so cloning a result clones handles, not geometry. The order is the
/// order the renderer reported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionResult<S> {
    items: SmallVec<[S; 4]>,
}

impl<S> SelectionResult<S> {
    /// Creates a result with nothing picked.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    /// Returns `true` if nothing was picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of picked handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the picked handles in pick order.
    #[must_use]
    pub fn items(&self) -> &[S] {
        &self.items
    }

    /// Returns the first picked handle, if any.
    #[must_use]
    pub fn first(&self) -> Option<&S> {
        self.items.first()
    }

    /// Returns an iterator over the picked handles.
    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.items.iter()
    }

    /// Consumes the result, returning the handles as a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<S> {
        self.items.into_vec()
    }
}

impl<S> Default for SelectionResult<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> From<Vec<S>> for SelectionResult<S> {
    fn from(items: Vec<S>) -> Self {
        Self {
            items: SmallVec::from_vec(items),
        }
    }
}

impl<S> FromIterator<S> for SelectionResult<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a SelectionResult<S> {
    type Item = &'a S;
    type IntoIter = core::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
