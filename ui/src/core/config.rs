//! Attribute resolution for the navigation widgets.
//!
//! Attributes arrive as plain strings. An empty attribute counts as absent,
//! so `logo=""` still shows the default logo.

use serde::Deserialize;

use super::error::ConfigurationError;
use super::links::{parse_links, Link, LinkPolicy};

pub const DEFAULT_LOGO: &str = "My App";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0B9CEC";
pub const DEFAULT_BREAKPOINT: u32 = 480;

/// Raw, string-typed attribute set as supplied by the host markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NavbarAttributes {
    pub logo: String,
    pub links: String,
    pub background_color: String,
    pub breakpoint: String,
}

/// Resolved navbar configuration. Read once when the widget mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarConfig {
    pub logo: String,
    /// Raw JSON link list; parsed when the widget is resolved for rendering.
    pub links: String,
    pub background_color: String,
    /// Viewport width in pixels at or below which the compact menu is used.
    pub breakpoint: u32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self::from_attributes(&NavbarAttributes::default())
    }
}

impl NavbarConfig {
    pub fn from_attributes(attrs: &NavbarAttributes) -> Self {
        Self {
            logo: or_default(&attrs.logo, DEFAULT_LOGO),
            links: attrs.links.clone(),
            background_color: parse_background_color(&attrs.background_color),
            breakpoint: parse_breakpoint(&attrs.breakpoint),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Characters that would end the declaration or the `<style>` element.
const CSS_VALUE_BREAKERS: &[char] = &[';', '{', '}', '<', '>', '"', '\'', '&', '\\', '\n', '\r'];

fn parse_background_color(raw: &str) -> String {
    if raw.contains(CSS_VALUE_BREAKERS) {
        tracing::warn!(
            background_color = raw,
            fallback = DEFAULT_BACKGROUND_COLOR,
            "ignoring background color that is not a single CSS value"
        );
        return DEFAULT_BACKGROUND_COLOR.to_string();
    }
    or_default(raw, DEFAULT_BACKGROUND_COLOR)
}

fn parse_breakpoint(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_BREAKPOINT;
    }
    // Accept "640px" as well as "640".
    let digits = raw.strip_suffix("px").unwrap_or(raw).trim();
    match digits.parse::<u32>() {
        Ok(px) => px,
        Err(err) => {
            tracing::warn!(
                breakpoint = raw,
                %err,
                fallback = DEFAULT_BREAKPOINT,
                "ignoring unparsable breakpoint attribute"
            );
            DEFAULT_BREAKPOINT
        }
    }
}

/// Which navigation widget is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVariant {
    /// Logo, links and search only. Accepts an empty link list.
    Simple,
    /// Adds the hamburger toggle and stacked secondary menu. Requires links.
    Responsive,
}

impl NavbarVariant {
    pub fn link_policy(self) -> LinkPolicy {
        match self {
            Self::Simple => LinkPolicy::Lenient,
            Self::Responsive => LinkPolicy::Strict,
        }
    }
}

/// Everything a navbar component needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarModel {
    pub config: NavbarConfig,
    pub variant: NavbarVariant,
    pub links: Vec<Link>,
}

impl NavbarModel {
    pub fn resolve(config: NavbarConfig, variant: NavbarVariant) -> Result<Self, ConfigurationError> {
        let links = parse_links(&config.links, variant.link_policy())?;
        Ok(Self {
            config,
            variant,
            links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_attributes() {
        let config = NavbarConfig::default();
        assert_eq!(config.logo, "My App");
        assert_eq!(config.background_color, "#0B9CEC");
        assert_eq!(config.breakpoint, 480);
        assert!(config.links.is_empty());
    }

    #[test]
    fn empty_attributes_count_as_absent() {
        let config = NavbarConfig::from_attributes(&NavbarAttributes {
            logo: String::new(),
            background_color: " ".into(),
            ..Default::default()
        });
        assert_eq!(config.logo, DEFAULT_LOGO);
        assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[test]
    fn supplied_attributes_override_defaults() {
        let config = NavbarConfig::from_attributes(&NavbarAttributes {
            logo: "Acme".into(),
            links: "[]".into(),
            background_color: "red".into(),
            breakpoint: "640".into(),
        });
        assert_eq!(config.logo, "Acme");
        assert_eq!(config.links, "[]");
        assert_eq!(config.background_color, "red");
        assert_eq!(config.breakpoint, 640);
    }

    #[test]
    fn breakpoint_accepts_px_suffix_and_falls_back_on_garbage() {
        assert_eq!(parse_breakpoint("720px"), 720);
        assert_eq!(parse_breakpoint("wide"), DEFAULT_BREAKPOINT);
        assert_eq!(parse_breakpoint("-5"), DEFAULT_BREAKPOINT);
    }

    #[test]
    fn background_color_cannot_escape_its_declaration() {
        for raw in [
            "red; } body { display: none",
            "red}",
            "blue</style><script>",
            "url(\"x\")",
        ] {
            assert_eq!(parse_background_color(raw), DEFAULT_BACKGROUND_COLOR, "{raw}");
        }
        assert_eq!(parse_background_color("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
        assert_eq!(parse_background_color("#222"), "#222");
    }

    #[test]
    fn attributes_deserialize_from_kebab_case_json() {
        let attrs: NavbarAttributes = serde_json::from_str(
            r#"{"logo":"Docs","background-color":"black","breakpoint":"600"}"#,
        )
        .unwrap();
        assert_eq!(attrs.background_color, "black");
        assert!(attrs.links.is_empty());
    }

    #[test]
    fn resolve_uses_the_variant_policy() {
        let config = NavbarConfig::from_attributes(&NavbarAttributes {
            links: "[]".into(),
            ..Default::default()
        });
        let simple = NavbarModel::resolve(config.clone(), NavbarVariant::Simple).unwrap();
        assert!(simple.links.is_empty());
        assert_eq!(
            NavbarModel::resolve(config, NavbarVariant::Responsive),
            Err(ConfigurationError::MissingLinks)
        );
    }
}
