/// Theme files embedded in the binary, keyed by theme name.
pub const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("dark", include_str!("../../themes/dark.toml")),
    ("default", include_str!("../../themes/default.toml")),
    ("neutral", include_str!("../../themes/neutral.toml")),
    ("strong", include_str!("../../themes/strong.toml")),
];

pub fn builtin_theme(name: &str) -> Option<&'static str> {
    BUILTIN_THEMES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, content)| *content)
}
