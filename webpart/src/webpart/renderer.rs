use crate::webpart::WebPartProperties;
use crate::webpart::strings::WebPartStrings;
use host::{Markup, Surface};

/// Builds the web part body from its properties.
///
/// Output depends only on the properties and the fixed strings; theme colors
/// reach the markup through stylesheet variables, never through rendering.
/// Runtime text enters the template exclusively via [`Markup::push_text`],
/// which escapes it.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRenderer {
    strings: WebPartStrings,
}

impl SurfaceRenderer {
    pub fn new(strings: WebPartStrings) -> Self {
        Self { strings }
    }

    pub fn strings(&self) -> &WebPartStrings {
        &self.strings
    }

    pub fn render(&self, properties: &WebPartProperties) -> Markup {
        let mut markup = Markup::new();
        markup
            .push_template(r#"<div class="sectionBackground" data-load-themed-styles="true">"#)
            .push_template(r#"<div class="container">"#)
            .push_template(r#"<div class="row">"#)
            .push_template(r#"<div class="column">"#)
            .push_template(r#"<span class="title">"#)
            .push_text(&self.strings.title)
            .push_template("</span>")
            .push_template(r#"<p class="subTitle">"#)
            .push_text(&self.strings.sub_title)
            .push_template("</p>")
            .push_template(r#"<p class="description">"#)
            .push_text(&properties.description)
            .push_template("</p>")
            .push_template("</div></div></div></div>");
        markup
    }

    /// Render and replace the surface content. Style variables are untouched.
    pub fn render_into(&self, surface: &dyn Surface, properties: &WebPartProperties) {
        let markup = self.render(properties);
        surface.set_content(&markup);
        log::debug!("Rendered {} bytes of markup", markup.as_str().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::DomElement;

    fn properties(description: &str) -> WebPartProperties {
        WebPartProperties {
            description: description.to_string(),
        }
    }

    #[test]
    fn test_render_escapes_script() {
        let markup = SurfaceRenderer::default().render(&properties("<script>alert(1)</script>"));

        assert!(markup.as_str().contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!markup.as_str().contains("<script>"));
    }

    #[test]
    fn test_render_contains_fixed_texts_and_description() {
        let markup = SurfaceRenderer::default().render(&properties("Hello, World!"));
        let html = markup.as_str();

        assert!(html.contains(r#"<span class="title">Welcome to SharePoint!</span>"#));
        assert!(html.contains(
            r#"<p class="subTitle">Customize SharePoint experiences using Web Parts.</p>"#
        ));
        assert!(html.contains(r#"<p class="description">Hello, World!</p>"#));
    }

    #[test]
    fn test_render_is_pure() {
        let renderer = SurfaceRenderer::default();
        assert_eq!(
            renderer.render(&properties("same")),
            renderer.render(&properties("same"))
        );
    }

    #[test]
    fn test_render_into_replaces_content_only() {
        let element = DomElement::with_id("root");
        element.set_style_variables(&[("--bodyText", "#fff")].into_iter().collect());

        let renderer = SurfaceRenderer::default();
        renderer.render_into(&element, &properties("first"));
        renderer.render_into(&element, &properties("second"));

        assert!(element.inner_html().contains("second"));
        assert!(!element.inner_html().contains("first"));
        assert_eq!(element.style_property("--bodyText").as_deref(), Some("#fff"));
    }
}
