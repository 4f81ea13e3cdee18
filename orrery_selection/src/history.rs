// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An accumulating record of published selections.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::broadcaster::CallbackError;
use crate::result::SelectionResult;

/// An accumulating list of every handle ever published.
///
/// Clones share the same list. Hand [`SelectionHistory::subscriber`] to a
/// [`SelectionBroadcaster`](crate::SelectionBroadcaster) and read the list back
/// whenever convenient.
#[derive(Clone, Debug)]
pub struct SelectionHistory<S> {
    items: Rc<RefCell<Vec<S>>>,
}

impl<S> SelectionHistory<S> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the number of accumulated handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Forgets everything accumulated so far.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Runs `f` with the accumulated handles, oldest first.
    pub fn with_items<R>(&self, f: impl FnOnce(&[S]) -> R) -> R {
        let items = self.items.borrow();
        f(items.as_slice())
    }
}

impl<S: Clone + 'static> SelectionHistory<S> {
    /// Returns a copy of the accumulated handles, oldest first.
    #[must_use]
    pub fn items(&self) -> Vec<S> {
        self.items.borrow().clone()
    }

    /// Appends the handles of `result`.
    pub fn record(&self, result: &SelectionResult<S>) {
        self.items.borrow_mut().extend(result.iter().cloned());
    }

    /// Returns a subscriber callback that appends each result to this history.
    pub fn subscriber(
        &self,
    ) -> impl FnMut(&SelectionResult<S>) -> Result<(), CallbackError> + use<S> {
        let history = self.clone();
        move |result: &SelectionResult<S>| {
            history.record(result);
            Ok(())
        }
    }
}

impl<S> Default for SelectionHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn subscriber_extends_in_publish_order() {
        let history = SelectionHistory::new();
        let mut append = history.subscriber();

        append(&SelectionResult::from(vec![1_u32, 2])).unwrap();
        append(&SelectionResult::from(vec![3])).unwrap();

        assert_eq!(history.items(), vec![1, 2, 3]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn clones_share_the_list() {
        let history = SelectionHistory::new();
        let view = history.clone();
        let mut append = history.subscriber();
        append(&SelectionResult::from(vec![9_u32])).unwrap();

        assert_eq!(view.with_items(|items| items.to_vec()), vec![9]);
        view.clear();
        assert!(history.is_empty());
    }
}
