use serde::{Deserialize, Serialize};

/// User-facing texts of the web part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPartStrings {
    pub property_pane_description: String,
    pub basic_group_name: String,
    pub description_field_label: String,
    pub title: String,
    pub sub_title: String,
}

impl WebPartStrings {
    pub fn en_us() -> Self {
        Self {
            property_pane_description: "Description".to_string(),
            basic_group_name: "Group Name".to_string(),
            description_field_label: "Description Field".to_string(),
            title: "Welcome to SharePoint!".to_string(),
            sub_title: "Customize SharePoint experiences using Web Parts.".to_string(),
        }
    }
}

impl Default for WebPartStrings {
    fn default() -> Self {
        Self::en_us()
    }
}
