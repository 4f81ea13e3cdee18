// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronous one-to-many delivery of pick results.
//!
//! [`SelectionBroadcaster::publish`] applies simple delivery rules:
//!
//! - Subscribers are visited in subscription order.
//! - Each visited subscriber is called exactly once with the same result.
//! - Empty results only reach subscribers registered with [`Delivery::Always`].
//! - A failing callback is reported and skipped; the others still run.
//! - The subscriber list is snapshotted when `publish` starts, so a callback that
//!   subscribes or unsubscribes someone changes the *next* publish, not this one.
//!
//! All methods take `&self`. Share the broadcaster with an `Rc` when a subscriber
//! needs to manage subscriptions from inside its own callback.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::result::SelectionResult;

/// Error type returned by subscriber callbacks.
pub type CallbackError = Box<dyn core::error::Error>;

type Callback<S> = dyn FnMut(&SelectionResult<S>) -> Result<(), CallbackError>;

/// Default subscriber identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u32);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber#{}", self.0)
    }
}

/// When a subscriber wants to be called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delivery {
    /// Only for results that picked something.
    #[default]
    NonEmpty,
    /// For every published result, including empty ones.
    Always,
}

/// Errors raised when registering a subscriber.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError<K: fmt::Debug> {
    /// The callback cannot be installed under this identity, because another
    /// callback is already registered with it.
    #[error("cannot install callback: {id:?} is already subscribed")]
    InvalidCallback {
        /// The identity that was rejected.
        id: K,
    },
}

/// Outcome of one [`SelectionBroadcaster::publish`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishReport<K> {
    delivered: Vec<K>,
    failed: Vec<K>,
}

impl<K> PublishReport<K> {
    fn new() -> Self {
        Self {
            delivered: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Subscribers whose callback ran successfully, in call order.
    #[must_use]
    pub fn delivered(&self) -> &[K] {
        &self.delivered
    }

    /// Subscribers whose callback failed or could not be entered.
    #[must_use]
    pub fn failed(&self) -> &[K] {
        &self.failed
    }

    /// Returns `true` if no callback failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

struct Subscriber<S, K> {
    id: K,
    delivery: Delivery,
    callback: Rc<RefCell<Callback<S>>>,
}

impl<S, K: Clone> Clone for Subscriber<S, K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            delivery: self.delivery,
            callback: Rc::clone(&self.callback),
        }
    }
}

/// Fans pick results out to an ordered list of subscribers.
///
/// `S` is the renderer's shape handle and `K` the subscriber identity.
pub struct SelectionBroadcaster<S, K = SubscriberId> {
    subscribers: RefCell<Vec<Subscriber<S, K>>>,
}

impl<S, K> SelectionBroadcaster<S, K>
where
    K: Clone + PartialEq + fmt::Debug,
{
    /// Creates a broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribes `callback` under `id` for non-empty results.
    ///
    /// Fails with [`SelectionError::InvalidCallback`] if `id` is already subscribed.
    pub fn subscribe<F>(&self, id: K, callback: F) -> Result<(), SelectionError<K>>
    where
        F: FnMut(&SelectionResult<S>) -> Result<(), CallbackError> + 'static,
    {
        self.insert(id, Delivery::NonEmpty, Rc::new(RefCell::new(callback)))
    }

    /// Subscribes `callback` under `id` for every result, including empty ones.
    pub fn subscribe_always<F>(&self, id: K, callback: F) -> Result<(), SelectionError<K>>
    where
        F: FnMut(&SelectionResult<S>) -> Result<(), CallbackError> + 'static,
    {
        self.insert(id, Delivery::Always, Rc::new(RefCell::new(callback)))
    }

    fn insert(
        &self,
        id: K,
        delivery: Delivery,
        callback: Rc<RefCell<Callback<S>>>,
    ) -> Result<(), SelectionError<K>> {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.iter().any(|s| s.id == id) {
            return Err(SelectionError::InvalidCallback { id });
        }
        log::trace!("selection subscriber {id:?} added ({delivery:?})");
        subscribers.push(Subscriber {
            id,
            delivery,
            callback,
        });
        Ok(())
    }

    /// Removes the subscriber registered under `id`.
    ///
    /// Returns `true` if it was subscribed.
    pub fn unsubscribe(&self, id: &K) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| &s.id != id);
        before != subscribers.len()
    }

    /// Returns `true` if a subscriber is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.subscribers.borrow().iter().any(|s| &s.id == id)
    }

    /// Returns the number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }

    /// Delivers `result` to the current subscribers.
    ///
    /// A callback that is still running further up the stack (a nested publish
    /// from inside a callback) is not entered again; it is reported as failed.
    pub fn publish(&self, result: &SelectionResult<S>) -> PublishReport<K> {
        let snapshot: Vec<Subscriber<S, K>> = self.subscribers.borrow().clone();
        let mut report = PublishReport::new();

        for subscriber in snapshot {
            if result.is_empty() && subscriber.delivery == Delivery::NonEmpty {
                continue;
            }
            let Ok(mut callback) = subscriber.callback.try_borrow_mut() else {
                log::warn!(
                    "selection subscriber {:?} re-entered during publish; skipped",
                    subscriber.id
                );
                report.failed.push(subscriber.id.clone());
                continue;
            };
            match (*callback)(result) {
                Ok(()) => report.delivered.push(subscriber.id.clone()),
                Err(err) => {
                    log::warn!("selection subscriber {:?} failed: {err}", subscriber.id);
                    report.failed.push(subscriber.id.clone());
                }
            }
        }

        log::trace!(
            "published {} handle(s) to {} subscriber(s)",
            result.len(),
            report.delivered.len()
        );
        report
    }
}

impl<S, K> Default for SelectionBroadcaster<S, K>
where
    K: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K: fmt::Debug> fmt::Debug for SelectionBroadcaster<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.borrow();
        f.debug_struct("SelectionBroadcaster")
            .field(
                "subscribers",
                &subscribers
                    .iter()
                    .map(|s| (&s.id, s.delivery))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn duplicate_identity_is_rejected_eagerly() {
        let broadcaster = SelectionBroadcaster::<u32>::new();
        broadcaster.subscribe(SubscriberId(1), |_| Ok(())).unwrap();

        let err = broadcaster
            .subscribe_always(SubscriberId(1), |_| Ok(()))
            .unwrap_err();
        assert!(matches!(
            err,
            SelectionError::InvalidCallback {
                id: SubscriberId(1)
            }
        ));
        assert_eq!(broadcaster.len(), 1);
    }

    #[test]
    fn unsubscribe_reports_presence() {
        let broadcaster = SelectionBroadcaster::<u32>::new();
        broadcaster.subscribe(SubscriberId(4), |_| Ok(())).unwrap();

        assert!(broadcaster.contains(&SubscriberId(4)));
        assert!(broadcaster.unsubscribe(&SubscriberId(4)));
        assert!(!broadcaster.unsubscribe(&SubscriberId(4)));
        assert!(broadcaster.is_empty());
    }

    #[test]
    fn publish_without_subscribers_is_a_clean_no_op() {
        let broadcaster = SelectionBroadcaster::<u32>::new();
        let report = broadcaster.publish(&SelectionResult::from(vec![1]));
        assert!(report.delivered().is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn custom_identity_types_work() {
        let broadcaster = SelectionBroadcaster::<u32, &'static str>::new();
        broadcaster.subscribe("panel", |_| Ok(())).unwrap();
        let report = broadcaster.publish(&SelectionResult::from(vec![2]));
        assert_eq!(report.delivered(), &["panel"]);
    }
}
