//! # Section Background Host Library
//!
//! Host-side capabilities consumed by the section background web part. A page
//! host owns these objects and hands them to the component at construction
//! time; the component never reaches for ambient globals.
//!
//! ## Modules
//!
//! - [`errors`] - Host error types
//! - [`events`] - Ordered event emitter and releasable subscriptions
//! - [`markup`] - HTML escaping and typed markup
//! - [`service_scope`] - Typed service registry used for dependency lookup
//! - [`surface`] - Rendering surface capability and the in-memory DOM element
//! - [`theme`] - Theme snapshot data model
//! - [`theme_provider`] - Theme notification service and its default implementation

pub mod errors;
pub mod events;
pub mod markup;
pub mod service_scope;
pub mod surface;
pub mod theme;
pub mod theme_provider;

pub use errors::HostError;
pub use events::{EventEmitter, ListenerId, Subscription};
pub use markup::{Escaped, Markup, escape};
pub use service_scope::{ServiceKey, ServiceScope};
pub use surface::{DomElement, StyleVariables, Surface};
pub use theme::ThemeSnapshot;
pub use theme_provider::{
    THEME_SERVICE_KEY, ThemeChangeHandler, ThemeChangedEventArgs, ThemeProvider, ThemeService,
};
