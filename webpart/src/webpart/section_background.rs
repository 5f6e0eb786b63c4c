use crate::error::{AppError, AppResult};
use crate::theme::{StaleVariablePolicy, ThemeBridge};
use crate::webpart::property_pane::{PropertyPaneConfiguration, section_background_pane};
use crate::webpart::renderer::SurfaceRenderer;
use crate::webpart::{ClientSideWebPart, WebPartContext, WebPartProperties};
use async_trait::async_trait;

/// Themed content block that follows the host page theme.
#[derive(Debug)]
pub struct SectionBackgroundWebPart {
    context: WebPartContext,
    properties: WebPartProperties,
    renderer: SurfaceRenderer,
    bridge: ThemeBridge,
    initialized: bool,
    disposed: bool,
}

impl SectionBackgroundWebPart {
    pub fn new(
        context: WebPartContext,
        properties: WebPartProperties,
        policy: StaleVariablePolicy,
    ) -> Self {
        let bridge = ThemeBridge::new(context.dom_element.clone(), policy);
        Self {
            context,
            properties,
            renderer: SurfaceRenderer::default(),
            bridge,
            initialized: false,
            disposed: false,
        }
    }

    pub fn context(&self) -> &WebPartContext {
        &self.context
    }

    pub fn properties(&self) -> &WebPartProperties {
        &self.properties
    }

    pub fn bridge(&self) -> &ThemeBridge {
        &self.bridge
    }

    fn ensure_active(&self, operation: &str) -> AppResult<()> {
        if self.disposed {
            return Err(AppError::State(format!(
                "{operation} called on disposed web part {}",
                self.context.instance_id
            )));
        }
        if !self.initialized {
            return Err(AppError::State(format!(
                "{operation} called before on_init() completed"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ClientSideWebPart for SectionBackgroundWebPart {
    async fn on_init(&mut self) -> AppResult<()> {
        if self.disposed {
            return Err(AppError::State(
                "on_init() called on a disposed web part".to_string(),
            ));
        }
        if self.initialized {
            return Err(AppError::State("on_init() called twice".to_string()));
        }

        self.bridge.initialize(&self.context.service_scope);
        self.initialized = true;

        log::info!(
            "Section background web part {} initialized ({:?})",
            self.context.instance_id,
            self.bridge.state()
        );
        Ok(())
    }

    fn render(&mut self) -> AppResult<()> {
        self.ensure_active("render()")?;
        self.renderer
            .render_into(self.context.dom_element.as_ref(), &self.properties);
        Ok(())
    }

    fn on_property_pane_field_changed(
        &mut self,
        property_path: &str,
        old_value: &str,
        new_value: &str,
    ) -> AppResult<()> {
        match property_path {
            "description" => {
                log::debug!("description changed: {old_value:?} -> {new_value:?}");
                self.properties.description = new_value.to_string();
                if self.initialized && !self.disposed {
                    self.render()?;
                }
                Ok(())
            }
            other => Err(AppError::Component(format!(
                "Unknown property '{other}' for section background web part"
            ))),
        }
    }

    fn property_pane_configuration(&self) -> PropertyPaneConfiguration {
        section_background_pane(self.renderer.strings())
    }

    fn on_dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.bridge.release();
        self.disposed = true;
        log::info!(
            "Section background web part {} disposed",
            self.context.instance_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use host::{DomElement, ServiceScope};
    use std::sync::Arc;

    fn webpart(description: &str) -> (Arc<DomElement>, SectionBackgroundWebPart) {
        let element = Arc::new(DomElement::with_id("root"));
        let context = WebPartContext::new(Arc::new(ServiceScope::new()), element.clone());
        let properties = WebPartProperties {
            description: description.to_string(),
        };
        (
            element,
            SectionBackgroundWebPart::new(context, properties, StaleVariablePolicy::Clear),
        )
    }

    #[tokio::test]
    async fn test_render_before_init_is_rejected() {
        let (element, mut part) = webpart("x");
        assert_matches!(part.render(), Err(AppError::State(_)));
        assert_eq!(element.content_writes(), 0);
    }

    #[tokio::test]
    async fn test_init_twice_is_rejected() {
        let (_element, mut part) = webpart("x");
        assert_ok!(part.on_init().await);
        assert_matches!(part.on_init().await, Err(AppError::State(_)));
    }

    #[tokio::test]
    async fn test_property_change_rerenders() {
        let (element, mut part) = webpart("before");
        assert_ok!(part.on_init().await);
        assert_ok!(part.render());

        assert_ok!(part.on_property_pane_field_changed("description", "before", "after & more"));

        assert_eq!(part.properties().description, "after & more");
        assert!(element.inner_html().contains("after &amp; more"));
        assert_eq!(element.content_writes(), 2);
    }

    #[tokio::test]
    async fn test_property_change_before_init_only_stores() {
        let (element, mut part) = webpart("before");
        assert_ok!(part.on_property_pane_field_changed("description", "before", "after"));

        assert_eq!(part.properties().description, "after");
        assert_eq!(element.content_writes(), 0);
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let (_element, mut part) = webpart("x");
        assert_matches!(
            part.on_property_pane_field_changed("title", "", "new"),
            Err(AppError::Component(_))
        );
    }

    #[tokio::test]
    async fn test_render_after_dispose_is_rejected() {
        let (_element, mut part) = webpart("x");
        assert_ok!(part.on_init().await);
        part.on_dispose();
        part.on_dispose();

        assert_matches!(part.render(), Err(AppError::State(_)));
    }

    #[test]
    fn test_data_version_is_one() {
        let (_element, part) = webpart("x");
        assert_eq!(part.data_version().to_string(), "1.0.0");
    }
}
