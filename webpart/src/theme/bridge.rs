use crate::theme::style_scope::StyleScope;
use crate::theme::types::StaleVariablePolicy;
use host::{
    THEME_SERVICE_KEY, ThemeChangeHandler, ThemeChangedEventArgs, ThemeService, ThemeSnapshot,
    events::Subscription, service_scope::ServiceScope, surface::Surface,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Lifecycle of a [`ThemeBridge`].
///
/// `Uninitialized -> AwaitingTheme -> Themed`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    /// Initialized, but no snapshot has been applied yet.
    AwaitingTheme,
    Themed,
}

struct BridgeInner {
    state: BridgeState,
    snapshot: Option<ThemeSnapshot>,
    scope: StyleScope,
    surface: Arc<dyn Surface>,
    policy: StaleVariablePolicy,
}

impl BridgeInner {
    fn apply(&mut self, snapshot: ThemeSnapshot) {
        let update = self.scope.apply(&snapshot, self.policy);
        if !update.removed.is_empty() {
            self.surface.remove_style_variables(&update.removed);
        }
        self.surface.set_style_variables(&update.set);

        log::debug!(
            "Applied theme snapshot: {} variable(s) set, {} removed",
            update.set.len(),
            update.removed.len()
        );
        self.snapshot = Some(snapshot);
        // Snapshots applied before initialization style the surface but do
        // not advance the lifecycle
        if self.state == BridgeState::AwaitingTheme {
            log::info!("Theme bridge is now themed");
            self.state = BridgeState::Themed;
        }
    }
}

fn lock(inner: &Mutex<BridgeInner>) -> MutexGuard<'_, BridgeInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps a surface's style variables in step with the host theme.
///
/// The bridge owns the single theme-change subscription of its component and
/// releases it when dropped, so a disposed component is never called back.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use host::{DomElement, ServiceScope, THEME_SERVICE_KEY, ThemeProvider, ThemeService, ThemeSnapshot};
/// use section_background::theme::{StaleVariablePolicy, ThemeBridge};
///
/// let provider = Arc::new(ThemeProvider::new());
/// let scope = ServiceScope::new();
/// scope.provide(&THEME_SERVICE_KEY, provider.clone() as Arc<dyn ThemeService>)?;
///
/// let element = Arc::new(DomElement::new());
/// let mut bridge = ThemeBridge::new(element.clone(), StaleVariablePolicy::Clear);
/// bridge.initialize(&scope);
///
/// provider.set_theme(ThemeSnapshot::from_entries([("bodyText", "#ffffff")]));
/// assert_eq!(element.style_property("--bodyText").as_deref(), Some("#ffffff"));
/// # Ok::<(), host::HostError>(())
/// ```
pub struct ThemeBridge {
    inner: Arc<Mutex<BridgeInner>>,
    service: Option<Arc<dyn ThemeService>>,
    subscription: Option<Subscription>,
    initialized: bool,
}

impl ThemeBridge {
    pub fn new(surface: Arc<dyn Surface>, policy: StaleVariablePolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BridgeInner {
                state: BridgeState::Uninitialized,
                snapshot: None,
                scope: StyleScope::new(),
                surface,
                policy,
            })),
            service: None,
            subscription: None,
            initialized: false,
        }
    }

    /// Look up the theme service in `service_scope` and start tracking it.
    pub fn initialize(&mut self, service_scope: &ServiceScope) {
        self.initialize_with(service_scope.consume(&THEME_SERVICE_KEY));
    }

    /// Start tracking `service`: capture the active theme, then subscribe.
    ///
    /// A missing service leaves the surface with its default styling. Only
    /// the first call has an effect.
    pub fn initialize_with(&mut self, service: Option<Arc<dyn ThemeService>>) {
        if self.initialized {
            log::warn!("Theme bridge is already initialized, ignoring");
            return;
        }

        self.initialized = true;
        lock(&self.inner).state = BridgeState::AwaitingTheme;
        self.service = service;

        if self.service.is_none() {
            log::info!("Theme service is not available, keeping default styling");
            return;
        }

        if self.capture_initial_theme().is_none() {
            log::info!("No active theme yet, waiting for a theme change");
        }
        self.subscribe(self.applier());
    }

    /// Apply the theme the service currently reports, if any.
    pub fn capture_initial_theme(&mut self) -> Option<ThemeSnapshot> {
        let theme = self.service.as_ref()?.try_get_theme()?;
        self.apply_snapshot(&theme);
        Some(theme)
    }

    /// Register `handler` for theme changes, replacing any earlier
    /// subscription of this bridge.
    ///
    /// Returns `false` when there is no service to subscribe to.
    pub fn subscribe<H>(&mut self, handler: H) -> bool
    where
        H: ThemeChangeHandler + 'static,
    {
        let Some(service) = self.service.as_ref() else {
            log::debug!("No theme service, subscription skipped");
            return false;
        };

        if let Some(previous) = self.subscription.take() {
            previous.release();
        }
        let subscription = service.on_change(Box::new(handler));
        log::debug!("Subscribed to theme changes ({:?})", subscription.id());
        self.subscription = Some(subscription);
        true
    }

    /// Handler that applies delivered snapshots to this bridge.
    ///
    /// It holds only a weak reference, so it does nothing once the bridge is
    /// gone.
    pub fn applier(&self) -> ThemeApplier {
        ThemeApplier {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Write `--<key>: <value>` for every entry of `snapshot` onto the surface.
    ///
    /// Before [`initialize`](Self::initialize) only the surface is styled; the
    /// bridge stays `Uninitialized` and can still be initialized.
    pub fn apply_snapshot(&self, snapshot: &ThemeSnapshot) {
        lock(&self.inner).apply(snapshot.clone());
    }

    /// Drop the theme-change subscription. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            log::debug!("Theme change subscription released");
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> BridgeState {
        lock(&self.inner).state
    }

    pub fn current_theme(&self) -> Option<ThemeSnapshot> {
        lock(&self.inner).snapshot.clone()
    }

    /// Style variables this bridge has written onto its surface.
    pub fn style_scope(&self) -> StyleScope {
        lock(&self.inner).scope.clone()
    }
}

impl Drop for ThemeBridge {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ThemeBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeBridge")
            .field("state", &self.state())
            .field("initialized", &self.initialized)
            .field("has_service", &self.service.is_some())
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}

/// Theme-change handler registered by [`ThemeBridge::initialize`].
pub struct ThemeApplier {
    inner: Weak<Mutex<BridgeInner>>,
}

impl ThemeChangeHandler for ThemeApplier {
    fn on_theme_changed(&self, args: &ThemeChangedEventArgs) {
        match self.inner.upgrade() {
            Some(inner) => lock(&inner).apply(args.theme.clone()),
            None => log::debug!("Theme change delivered to a disposed bridge, ignoring"),
        }
    }
}
