//! Size observation of rendered containers.
//!
//! A [`SizeObserver`] notifies a callback whenever the rendered size of a
//! watched target changes. Hosts inject one; [`BoundsObserver`] is driven by
//! bounds the host reports after layout.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{ObserveError, ObserveResult};

pub type ResizeCallback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub trait SizeObserver {
    type Target;

    fn observe(
        &self,
        target: &Self::Target,
        callback: ResizeCallback,
    ) -> ObserveResult<SubscriptionId>;

    fn unobserve(&self, subscription: SubscriptionId) -> ObserveResult<()>;
}

impl<T> SizeObserver for Rc<T>
where
    T: SizeObserver + ?Sized,
{
    type Target = T::Target;

    fn observe(
        &self,
        target: &Self::Target,
        callback: ResizeCallback,
    ) -> ObserveResult<SubscriptionId> {
        (**self).observe(target, callback)
    }

    fn unobserve(&self, subscription: SubscriptionId) -> ObserveResult<()> {
        (**self).unobserve(subscription)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObservedSize {
    pub width: f32,
    pub height: f32,
}

impl ObservedSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

struct Observation<K> {
    target: K,
    callback: ResizeCallback,
    last_size: Option<ObservedSize>,
}

/// Observer fed by host-reported bounds.
///
/// Each subscription fires once for the first report of its target and again
/// only when the reported size differs from the previous one.
pub struct BoundsObserver<K> {
    next_id: Cell<u64>,
    observations: RefCell<BTreeMap<SubscriptionId, Observation<K>>>,
}

impl<K> Default for BoundsObserver<K> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(1),
            observations: RefCell::new(BTreeMap::new()),
        }
    }
}

impl<K> fmt::Debug for BoundsObserver<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsObserver")
            .field("active", &self.active_subscriptions())
            .finish()
    }
}

impl<K> BoundsObserver<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_subscriptions(&self) -> usize {
        self.observations.borrow().len()
    }
}

impl<K: Clone + PartialEq> BoundsObserver<K> {
    pub fn is_observing(&self, target: &K) -> bool {
        self.observations
            .borrow()
            .values()
            .any(|observation| &observation.target == target)
    }

    /// Records the laid-out size of `target` and notifies every subscription
    /// whose last seen size differs. Returns the number of callbacks invoked.
    pub fn report(&self, target: &K, size: ObservedSize) -> usize {
        let due = {
            let mut observations = self.observations.borrow_mut();
            observations
                .values_mut()
                .filter(|observation| &observation.target == target)
                .filter(|observation| observation.last_size != Some(size))
                .map(|observation| {
                    observation.last_size = Some(size);
                    observation.callback.clone()
                })
                .collect::<Vec<_>>()
        };
        // Callbacks may subscribe or unsubscribe, so none run under the borrow.
        for callback in &due {
            (callback)();
        }
        due.len()
    }
}

impl<K: Clone + PartialEq> SizeObserver for BoundsObserver<K> {
    type Target = K;

    fn observe(&self, target: &K, callback: ResizeCallback) -> ObserveResult<SubscriptionId> {
        let id = SubscriptionId::new(self.next_id.get());
        self.next_id.set(id.get() + 1);
        self.observations.borrow_mut().insert(
            id,
            Observation {
                target: target.clone(),
                callback,
                last_size: None,
            },
        );
        Ok(id)
    }

    fn unobserve(&self, subscription: SubscriptionId) -> ObserveResult<()> {
        self.observations
            .borrow_mut()
            .remove(&subscription)
            .map(|_| ())
            .ok_or(ObserveError::UnknownSubscription(subscription))
    }
}
