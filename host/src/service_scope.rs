use crate::errors::{HostError, HostResult};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

/// Well-known, typed name of a service in a [`ServiceScope`].
///
/// The type parameter ties the name to the interface stored under it, so a
/// lookup returns `Arc<T>` without casts at the call site.
pub struct ServiceKey<T: ?Sized> {
    name: &'static str,
    _service: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized> ServiceKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _service: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> Clone for ServiceKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ServiceKey<T> {}

impl<T: ?Sized> fmt::Debug for ServiceKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceKey").field(&self.name).finish()
    }
}

/// Registry through which a host hands capabilities to its components.
///
/// A host populates the scope with [`provide`](Self::provide) before the
/// component is initialized; the component pulls what it needs with
/// [`consume`](Self::consume). Absence is an ordinary answer, not an error.
#[derive(Default)]
pub struct ServiceScope {
    services: RwLock<HashMap<&'static str, Box<dyn Any + Send + Sync>>>,
}

impl ServiceScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` under `key`.
    pub fn provide<T>(&self, key: &ServiceKey<T>, service: Arc<T>) -> HostResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let mut services = self
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if services.contains_key(key.name) {
            return Err(HostError::ServiceAlreadyRegistered { key: key.name });
        }

        services.insert(key.name, Box::new(service));
        log::info!("Service '{}' registered", key.name);
        Ok(())
    }

    /// Look up the service registered under `key`.
    pub fn consume<T>(&self, key: &ServiceKey<T>) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);

        let Some(entry) = services.get(key.name) else {
            log::debug!("Service '{}' is not available in this scope", key.name);
            return None;
        };

        let service = entry.downcast_ref::<Arc<T>>().cloned();
        if service.is_none() {
            log::warn!(
                "Service '{}' is registered with a different interface than requested",
                key.name
            );
        }
        service
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}

impl fmt::Debug for ServiceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let services = self.services.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<&&'static str> = services.keys().collect();
        names.sort();
        f.debug_struct("ServiceScope").field("services", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    trait Greeter: std::fmt::Debug + Send + Sync {
        fn greet(&self) -> String;
    }

    #[derive(Debug)]
    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    const GREETER_KEY: ServiceKey<dyn Greeter> = ServiceKey::new("Greeter");

    #[test]
    fn test_consume_returns_provided_service() {
        let scope = ServiceScope::new();
        assert_ok!(scope.provide(&GREETER_KEY, Arc::new(English) as Arc<dyn Greeter>));

        let greeter = assert_some!(scope.consume(&GREETER_KEY));
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn test_consume_missing_service_is_none() {
        let scope = ServiceScope::new();
        assert_none!(scope.consume(&GREETER_KEY));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let scope = ServiceScope::new();
        assert_ok!(scope.provide(&GREETER_KEY, Arc::new(English) as Arc<dyn Greeter>));

        let err = assert_err!(scope.provide(&GREETER_KEY, Arc::new(English) as Arc<dyn Greeter>));
        assert_eq!(err, HostError::ServiceAlreadyRegistered { key: "Greeter" });
    }

    #[test]
    fn test_mismatched_interface_is_none() {
        let scope = ServiceScope::new();
        let number_key: ServiceKey<u32> = ServiceKey::new("Greeter");
        assert_ok!(scope.provide(&number_key, Arc::new(5)));

        assert_none!(scope.consume(&GREETER_KEY));
        assert!(scope.contains("Greeter"));
    }
}
