//! Observable system record store.
//!
//! The mobile-style ambient reactive database is replaced here by an
//! explicit interface: a record exposes its current value through a
//! polling accessor (`get`) and a push accessor (`subscribe`), and
//! every subscription returns a [`Subscription`] cancellation handle
//! that deregisters the listener when cancelled or dropped.
//!
//! Everything runs on the single UI thread; listeners are invoked
//! synchronously on the writer's call stack.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{TempoError, TempoResult};
use crate::types::User;

/// System identifier of the current-user record.
pub const CURRENT_USER_ID: &str = "currentUserId";

type Callback<T> = Arc<dyn Fn(&T)>;

struct Registry<T> {
    listeners: HashMap<u64, Callback<T>>,
    next_id: u64,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            listeners: HashMap::new(),
            next_id: 0,
        }
    }
}

/// A listener registry shared by records and event buses.
pub(crate) struct Listeners<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Listeners<T> {
    pub(crate) fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }

    pub(crate) fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Arc::new(f));
        drop(registry);

        let registry = Arc::downgrade(&self.registry);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.lock().listeners.remove(&id);
                }
            })),
        }
    }

    /// Invoke every registered listener with `value`.
    ///
    /// Listeners are snapshotted before invocation so a callback may
    /// subscribe or cancel without deadlocking the registry.
    pub(crate) fn notify(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self.registry.lock().listeners.values().cloned().collect();
        for callback in snapshot {
            callback(value);
        }
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.registry.lock().listeners.len()
    }
}

/// Cancellation handle for a registered listener.
///
/// Cancelling (or dropping) the handle deregisters the listener; both
/// paths are idempotent.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Explicitly deregister the listener.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// A single observable record.
pub struct ObservedRecord<T> {
    value: Arc<Mutex<Option<T>>>,
    listeners: Listeners<T>,
}

impl<T> Clone for ObservedRecord<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: Clone + 'static> Default for ObservedRecord<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ObservedRecord<T> {
    pub fn new() -> Self {
        Self {
            value: Arc::new(Mutex::new(None)),
            listeners: Listeners::new(),
        }
    }

    /// Polling accessor: the current value, if the record has resolved.
    pub fn get(&self) -> Option<T> {
        self.value.lock().clone()
    }

    /// Write the record and re-deliver it to every subscriber.
    pub fn set(&self, value: T) {
        *self.value.lock() = Some(value.clone());
        self.listeners.notify(&value);
    }

    /// Push accessor: deliver the current value immediately when the
    /// record has already resolved, then on every subsequent write.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        if let Some(current) = self.get() {
            f(&current);
        }
        self.listeners.subscribe(f)
    }
}

/// The system store: well-known records keyed by system identifier.
///
/// Only the record behind [`CURRENT_USER_ID`] exists today.
#[derive(Clone, Default)]
pub struct SystemStore {
    current_user: ObservedRecord<User>,
}

impl SystemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user record by its system identifier.
    ///
    /// Records are shared handles: reads, writes, and subscriptions on
    /// the returned record are visible to every other holder.
    pub fn user_record(&self, record_id: &str) -> TempoResult<ObservedRecord<User>> {
        match record_id {
            CURRENT_USER_ID => Ok(self.current_user.clone()),
            other => Err(TempoError::RecordNotFound(other.to_string())),
        }
    }

    /// Current user, if the record has resolved.
    pub fn current_user(&self) -> Option<User> {
        self.user_record(CURRENT_USER_ID)
            .ok()
            .and_then(|record| record.get())
    }

    /// Upstream write of the current-user record.
    pub fn set_current_user(&self, user: User) {
        tracing::debug!(user = %user.username, "current user record updated");
        self.current_user.set(user);
    }

    /// Observe the current-user record.
    pub fn subscribe_current_user(&self, f: impl Fn(&User) + 'static) -> Subscription {
        self.current_user.subscribe(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_before_first_set_is_none() {
        let store = SystemStore::new();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_user_record_keyed_lookup_shares_the_record() {
        let store = SystemStore::new();
        let record = store.user_record(CURRENT_USER_ID).unwrap();

        store.set_current_user(User::new("jdoe"));
        assert_eq!(
            record.get().map(|user| user.username),
            Some("jdoe".to_string())
        );
    }

    #[test]
    fn test_user_record_rejects_unknown_id() {
        let store = SystemStore::new();
        assert!(matches!(
            store.user_record("lastTeamId"),
            Err(TempoError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_subscribe_delivers_current_and_updates() {
        let store = SystemStore::new();
        store.set_current_user(User::new("jdoe"));

        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe_current_user(move |user| {
            sink.borrow_mut().push(user.username.clone());
        });

        store.set_current_user(User::new("asaucer"));
        assert_eq!(*seen.borrow(), vec!["jdoe".to_string(), "asaucer".to_string()]);
    }

    #[test]
    fn test_cancel_deregisters_listener() {
        let record: ObservedRecord<u32> = ObservedRecord::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let sub = record.subscribe(move |v| sink.borrow_mut().push(*v));
        record.set(1);
        sub.cancel();
        record.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(record.listeners.count(), 0);
    }

    #[test]
    fn test_drop_deregisters_listener() {
        let record: ObservedRecord<u32> = ObservedRecord::new();
        {
            let _sub = record.subscribe(|_| {});
            assert_eq!(record.listeners.count(), 1);
        }
        assert_eq!(record.listeners.count(), 0);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let record: ObservedRecord<u32> = ObservedRecord::new();
        let seen_a = Rc::new(RefCell::new(0u32));
        let seen_b = Rc::new(RefCell::new(0u32));

        let sink_a = Rc::clone(&seen_a);
        let sink_b = Rc::clone(&seen_b);
        let _sub_a = record.subscribe(move |v| *sink_a.borrow_mut() = *v);
        let _sub_b = record.subscribe(move |v| *sink_b.borrow_mut() = *v);

        record.set(7);
        assert_eq!(*seen_a.borrow(), 7);
        assert_eq!(*seen_b.borrow(), 7);
    }
}
