//! Subscribable values.
//!
//! [`Observable`] holds a value and a list of listeners. Listeners run
//! synchronously, in subscription order, and only when a write actually
//! changes the value, so dependents re-run on change and never otherwise.

use std::fmt;

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<'a, T> = Box<dyn FnMut(&T) + 'a>;

/// A value that notifies listeners when it changes.
///
/// # Example
///
/// ```
/// use oculus::context::Observable;
/// use std::cell::Cell;
///
/// let seen = Cell::new(0);
/// let mut value = Observable::new(1);
/// value.subscribe(|v| seen.set(*v));
///
/// value.set(1);
/// assert_eq!(seen.get(), 0);
/// value.set(5);
/// assert_eq!(seen.get(), 5);
/// ```
pub struct Observable<'a, T> {
    value: T,
    listeners: Vec<(SubscriptionId, Listener<'a, T>)>,
    next_id: u64,
}

impl<'a, T: PartialEq> Observable<'a, T> {
    /// Wraps `value` with no listeners.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value. Returns whether it changed (and listeners ran).
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }

    /// Edits the value in place, notifying if the result differs.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let mut next = self.value.clone();
        edit(&mut next);
        self.set(next)
    }

    /// Registers a listener that runs after every change.
    ///
    /// Listeners are not called for the current value.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
