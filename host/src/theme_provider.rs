use crate::events::{EventEmitter, Subscription};
use crate::service_scope::ServiceKey;
use crate::theme::ThemeSnapshot;
use std::sync::{Mutex, PoisonError, RwLock};

/// Key under which hosts register their theme notification service.
pub const THEME_SERVICE_KEY: ServiceKey<dyn ThemeService> = ServiceKey::new("ThemeProvider");

/// Payload delivered to handlers when the host switches themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChangedEventArgs {
    pub theme: ThemeSnapshot,
}

/// Callback for theme changes.
pub trait ThemeChangeHandler: Send + Sync {
    fn on_theme_changed(&self, args: &ThemeChangedEventArgs);
}

impl<F> ThemeChangeHandler for F
where
    F: Fn(&ThemeChangedEventArgs) + Send + Sync,
{
    fn on_theme_changed(&self, args: &ThemeChangedEventArgs) {
        self(args);
    }
}

/// Theme notification capability a host offers to its components.
///
/// # Examples
///
/// ```no_run
/// use host::{ThemeProvider, ThemeService, ThemeSnapshot};
///
/// let provider = ThemeProvider::new();
/// assert!(provider.try_get_theme().is_none());
///
/// let subscription = provider.on_change(Box::new(|args: &host::ThemeChangedEventArgs| {
///     println!("{} colors", args.theme.len());
/// }));
/// provider.set_theme(ThemeSnapshot::from_entries([("bodyText", "#000000")]));
/// subscription.release();
/// ```
pub trait ThemeService: Send + Sync {
    /// The active theme, or `None` while the host has not resolved one yet.
    fn try_get_theme(&self) -> Option<ThemeSnapshot>;

    /// Register `handler` for future theme changes.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// released or dropped.
    fn on_change(&self, handler: Box<dyn ThemeChangeHandler>) -> Subscription;
}

/// Default [`ThemeService`] backed by an in-process event emitter.
#[derive(Debug, Default)]
pub struct ThemeProvider {
    current: RwLock<Option<ThemeSnapshot>>,
    changed: EventEmitter<ThemeChangedEventArgs>,
    // Serializes store + notify so handlers see changes in store order
    dispatch: Mutex<()>,
}

impl ThemeProvider {
    /// Provider with no theme resolved yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: ThemeSnapshot) -> Self {
        Self {
            current: RwLock::new(Some(theme)),
            changed: EventEmitter::new(),
            dispatch: Mutex::new(()),
        }
    }

    /// Make `theme` the active theme and notify every handler.
    ///
    /// Concurrent callers are serialized: the last theme delivered to handlers
    /// is always the one [`try_get_theme`](ThemeService::try_get_theme)
    /// reports. Handlers must not call `set_theme` themselves.
    pub fn set_theme(&self, theme: ThemeSnapshot) {
        let _dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = Some(theme.clone());
        }

        log::info!("Theme changed ({} semantic colors)", theme.len());
        self.changed.emit(&ThemeChangedEventArgs { theme });
    }

    /// Number of handlers currently registered for theme changes.
    pub fn listener_count(&self) -> usize {
        self.changed.len()
    }
}

impl ThemeService for ThemeProvider {
    fn try_get_theme(&self) -> Option<ThemeSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn on_change(&self, handler: Box<dyn ThemeChangeHandler>) -> Subscription {
        self.changed
            .add(move |args: &ThemeChangedEventArgs| handler.on_theme_changed(args))
    }
}
