use host::{DomElement, ThemeSnapshot};
use proptest::prelude::*;
use section_background::theme::validation::ThemeNameValidator;
use section_background::{StaleVariablePolicy, SurfaceRenderer, ThemeBridge, Validator, WebPartProperties};
use std::collections::BTreeMap;
use std::sync::Arc;

fn colors() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-zA-Z]{1,16}", "[#a-f0-9]{1,7}|rgba\\([0-9, ]{1,12}\\)", 0..16)
}

#[cfg(test)]
mod bridge_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_every_entry_becomes_a_variable(entries in colors()) {
            let element = Arc::new(DomElement::new());
            let bridge = ThemeBridge::new(element.clone(), StaleVariablePolicy::Clear);
            bridge.apply_snapshot(&ThemeSnapshot::from_entries(entries.clone()));

            // Property: one `--key` per entry, value unchanged
            for (key, value) in &entries {
                let stored = element.style_property(&format!("--{key}"));
                prop_assert_eq!(stored.as_deref(), Some(value.as_str()));
            }
            prop_assert_eq!(element.style_variables().len(), entries.len());
        }

        #[test]
        fn test_applying_twice_is_idempotent(entries in colors()) {
            let element = Arc::new(DomElement::new());
            let bridge = ThemeBridge::new(element.clone(), StaleVariablePolicy::Clear);
            let snapshot = ThemeSnapshot::from_entries(entries);

            bridge.apply_snapshot(&snapshot);
            let once = element.style_variables();
            bridge.apply_snapshot(&snapshot);

            prop_assert_eq!(element.style_variables(), once);
        }

        #[test]
        fn test_clear_policy_mirrors_latest_snapshot(first in colors(), second in colors()) {
            let element = Arc::new(DomElement::new());
            let bridge = ThemeBridge::new(element.clone(), StaleVariablePolicy::Clear);

            bridge.apply_snapshot(&ThemeSnapshot::from_entries(first));
            bridge.apply_snapshot(&ThemeSnapshot::from_entries(second.clone()));

            // Property: only the latest snapshot's keys remain
            prop_assert_eq!(element.style_variables().len(), second.len());
        }

        #[test]
        fn test_retain_policy_keeps_union(first in colors(), second in colors()) {
            let element = Arc::new(DomElement::new());
            let bridge = ThemeBridge::new(element.clone(), StaleVariablePolicy::Retain);

            bridge.apply_snapshot(&ThemeSnapshot::from_entries(first.clone()));
            bridge.apply_snapshot(&ThemeSnapshot::from_entries(second.clone()));

            let union: std::collections::BTreeSet<&String> = first.keys().chain(second.keys()).collect();
            prop_assert_eq!(element.style_variables().len(), union.len());
            for (key, value) in &second {
                let stored = element.style_property(&format!("--{key}"));
                prop_assert_eq!(stored.as_deref(), Some(value.as_str()));
            }
        }
    }
}

#[cfg(test)]
mod renderer_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_description_never_injects_markup(description in ".*") {
            let renderer = SurfaceRenderer::default();
            let html = renderer.render(&WebPartProperties { description: description.clone() }).into_string();

            // Property: the description slot holds no raw tag delimiters
            let start = html.find(r#"<p class="description">"#).unwrap() + r#"<p class="description">"#.len();
            let end = html[start..].find("</p>").unwrap() + start;
            let slot = &html[start..end];
            prop_assert!(!slot.contains('<'));
            prop_assert!(!slot.contains('>'));
            prop_assert!(!slot.contains('"'));
        }

        #[test]
        fn test_render_is_deterministic(description in ".*") {
            let renderer = SurfaceRenderer::default();
            let properties = WebPartProperties { description };
            prop_assert_eq!(renderer.render(&properties), renderer.render(&properties));
        }
    }
}

#[cfg(test)]
mod theme_name_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_names_with_path_separators_rejected(prefix in "[a-z]{0,5}", suffix in "[a-z]{0,5}") {
            let name = format!("{prefix}/{suffix}");
            prop_assert!(ThemeNameValidator.validate(name.as_str()).is_err());
        }

        #[test]
        fn test_simple_names_accepted(name in "[a-z][a-z0-9]{0,20}") {
            prop_assert!(ThemeNameValidator.validate(name.as_str()).is_ok());
        }
    }
}
