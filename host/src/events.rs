use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Identifier for a registered event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;
type Listeners<T> = Mutex<Vec<(ListenerId, Handler<T>)>>;

fn lock<T>(listeners: &Listeners<T>) -> MutexGuard<'_, Vec<(ListenerId, Handler<T>)>> {
    // Handlers run outside the lock, so a poisoned list is still consistent.
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered list of handlers for one kind of event.
///
/// Handlers are invoked in registration order. Each registration hands back a
/// [`Subscription`]; dropping or releasing it removes the handler, so a
/// component that goes away can never be called again.
///
/// # Examples
///
/// ```no_run
/// use host::events::EventEmitter;
///
/// let emitter: EventEmitter<u32> = EventEmitter::new();
/// let subscription = emitter.add(|value| println!("got {value}"));
/// emitter.emit(&7);
/// subscription.release();
/// assert_eq!(emitter.len(), 0);
/// ```
pub struct EventEmitter<T> {
    listeners: Arc<Listeners<T>>,
    next_id: AtomicU64,
}

impl<T: 'static> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a handler and return the token that keeps it registered.
    pub fn add<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.listeners).push((id, Arc::new(handler)));
        log::debug!("Event handler {id} registered");

        let registry: Weak<Listeners<T>> = Arc::downgrade(&self.listeners);
        Subscription::new(id, move || {
            if let Some(listeners) = registry.upgrade() {
                lock(&listeners).retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    /// Invoke every registered handler with `event`.
    ///
    /// The handler list is copied before dispatch so handlers may release
    /// subscriptions while running. A handler released by an earlier handler
    /// of the same dispatch is skipped.
    pub fn emit(&self, event: &T) {
        let handlers: Vec<(ListenerId, Handler<T>)> = lock(&self.listeners)
            .iter()
            .map(|(id, handler)| (*id, Arc::clone(handler)))
            .collect();

        log::debug!("Dispatching event to {} handler(s)", handlers.len());
        for (id, handler) in handlers {
            if !self.is_registered(id) {
                log::debug!("Event handler {id} released during dispatch, skipped");
                continue;
            }
            handler(event);
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        lock(&self.listeners)
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    /// Number of currently registered handlers.
    pub fn len(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &format!("{} listeners", lock(&self.listeners).len()))
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Registration token for an event handler.
///
/// The handler stays registered while the token is alive. [`release`] removes
/// it explicitly; dropping the token does the same, which covers teardown on
/// error paths and unwinding.
///
/// [`release`]: Subscription::release
pub struct Subscription {
    id: ListenerId,
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new<F>(id: ListenerId, release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Unregister the handler now.
    pub fn release(mut self) {
        self.release_handler();
    }

    fn release_handler(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            log::debug!("Event handler {} released", self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_handler();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_run_in_registration_order() {
        let emitter: EventEmitter<&'static str> = EventEmitter::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first_calls = Arc::clone(&calls);
        let _first = emitter.add(move |event| first_calls.lock().unwrap().push(format!("a:{event}")));
        let second_calls = Arc::clone(&calls);
        let _second = emitter.add(move |event| second_calls.lock().unwrap().push(format!("b:{event}")));

        emitter.emit(&"x");
        emitter.emit(&"y");

        assert_eq!(*calls.lock().unwrap(), vec!["a:x", "b:x", "a:y", "b:y"]);
    }

    #[test]
    fn test_release_removes_handler() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let count = Arc::new(Mutex::new(0));

        let handler_count = Arc::clone(&count);
        let subscription = emitter.add(move |_| *handler_count.lock().unwrap() += 1);
        emitter.emit(&1);
        subscription.release();
        emitter.emit(&2);

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_drop_removes_handler() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        {
            let _subscription = emitter.add(|_| {});
            assert_eq!(emitter.len(), 1);
        }
        assert_eq!(emitter.len(), 0);
    }

    #[test]
    fn test_subscription_outliving_emitter_is_harmless() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let subscription = emitter.add(|_| {});
        drop(emitter);
        subscription.release();
    }

    #[test]
    fn test_handler_released_mid_dispatch_is_skipped() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let later: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let later_calls = Arc::new(Mutex::new(0));

        let to_release = Arc::clone(&later);
        let _first = emitter.add(move |_| {
            if let Some(subscription) = to_release.lock().unwrap().take() {
                subscription.release();
            }
        });
        let counter = Arc::clone(&later_calls);
        *later.lock().unwrap() = Some(emitter.add(move |_| *counter.lock().unwrap() += 1));

        emitter.emit(&1);

        assert_eq!(*later_calls.lock().unwrap(), 0);
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let emitter: EventEmitter<u32> = EventEmitter::new();
        let a = emitter.add(|_| {});
        let b = emitter.add(|_| {});
        assert_ne!(a.id(), b.id());
    }
}
