//! # Web Part Module
//!
//! Component lifecycle as seen by the hosting page:
//!
//! 1. The host builds a [`WebPartContext`] (service scope, root surface,
//!    instance id) and constructs the web part with its properties.
//! 2. The host awaits [`ClientSideWebPart::on_init`] before anything else.
//! 3. The host calls [`ClientSideWebPart::render`]; theme changes after this
//!    point only touch style variables.
//! 4. Property pane edits arrive through
//!    [`ClientSideWebPart::on_property_pane_field_changed`] and re-render.
//! 5. [`ClientSideWebPart::on_dispose`] releases the theme subscription.

pub mod property_pane;
pub mod renderer;
pub mod section_background;
pub mod strings;
pub mod styles;

pub use property_pane::PropertyPaneConfiguration;
pub use renderer::SurfaceRenderer;
pub use section_background::SectionBackgroundWebPart;
pub use strings::WebPartStrings;

use crate::error::AppResult;
use async_trait::async_trait;
use host::{ServiceScope, Surface};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// User-editable properties of the web part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPartProperties {
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_description() -> String {
    "SectionBackground".to_string()
}

impl Default for WebPartProperties {
    fn default() -> Self {
        Self {
            description: default_description(),
        }
    }
}

/// Everything the host hands to a web part instance.
#[derive(Clone)]
pub struct WebPartContext {
    pub instance_id: Uuid,
    pub service_scope: Arc<ServiceScope>,
    pub dom_element: Arc<dyn Surface>,
}

impl WebPartContext {
    pub fn new(service_scope: Arc<ServiceScope>, dom_element: Arc<dyn Surface>) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            service_scope,
            dom_element,
        }
    }
}

impl fmt::Debug for WebPartContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebPartContext")
            .field("instance_id", &self.instance_id)
            .field("service_scope", &self.service_scope)
            .finish_non_exhaustive()
    }
}

/// Version of the persisted property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Contract between a hosting page and a client-side web part.
#[async_trait]
pub trait ClientSideWebPart: Send {
    /// One-time initialization; the host awaits it before the first render.
    async fn on_init(&mut self) -> AppResult<()>;

    /// Write the markup into the root surface.
    fn render(&mut self) -> AppResult<()>;

    /// Apply a property pane edit.
    fn on_property_pane_field_changed(
        &mut self,
        property_path: &str,
        old_value: &str,
        new_value: &str,
    ) -> AppResult<()>;

    fn data_version(&self) -> Version {
        Version::new(1, 0, 0)
    }

    fn property_pane_configuration(&self) -> PropertyPaneConfiguration;

    /// Release host resources. Safe to call more than once.
    fn on_dispose(&mut self);
}
