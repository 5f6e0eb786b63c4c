use crate::webpart::strings::WebPartStrings;
use serde::Serialize;

/// Declarative description of the property editing panel.
///
/// The host renders the panel; the web part only says what is on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneConfiguration {
    pub pages: Vec<PropertyPanePage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPanePage {
    pub header: PropertyPanePageHeader,
    pub groups: Vec<PropertyPaneGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPanePageHeader {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneGroup {
    pub group_name: String,
    pub group_fields: Vec<PropertyPaneField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyPaneField {
    #[serde(rename_all = "camelCase")]
    TextField {
        target_property: String,
        label: String,
    },
}

impl PropertyPaneField {
    pub fn text_field(target_property: &str, label: &str) -> Self {
        PropertyPaneField::TextField {
            target_property: target_property.to_string(),
            label: label.to_string(),
        }
    }

    pub fn target_property(&self) -> &str {
        match self {
            PropertyPaneField::TextField {
                target_property, ..
            } => target_property,
        }
    }
}

/// Single page with one group holding the `description` text field.
pub fn section_background_pane(strings: &WebPartStrings) -> PropertyPaneConfiguration {
    PropertyPaneConfiguration {
        pages: vec![PropertyPanePage {
            header: PropertyPanePageHeader {
                description: strings.property_pane_description.clone(),
            },
            groups: vec![PropertyPaneGroup {
                group_name: strings.basic_group_name.clone(),
                group_fields: vec![PropertyPaneField::text_field(
                    "description",
                    &strings.description_field_label,
                )],
            }],
        }],
    }
}
