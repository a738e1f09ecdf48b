//! Simple navigation bar: logo, link list and a decorative search box.

use dioxus::prelude::*;

use crate::core::config::{NavbarAttributes, NavbarConfig, NavbarModel, NavbarVariant};
use crate::core::error::ConfigurationError;
use crate::core::links::Link;
use crate::core::style::{self, StyleScope};
use crate::i18n;
use crate::t;

/// Resolve attributes into a model once per mount.
///
/// The outcome lives in a hook, so a changed attribute after mounting does
/// not re-parse or re-render the link list.
pub(crate) fn use_navbar_model(
    attrs: NavbarAttributes,
    variant: NavbarVariant,
) -> Result<NavbarModel, ConfigurationError> {
    use_hook(move || {
        let config = NavbarConfig::from_attributes(&attrs);
        let resolved = NavbarModel::resolve(config, variant);
        match &resolved {
            Ok(model) => tracing::debug!(?variant, links = model.links.len(), "navbar mounted"),
            Err(err) => tracing::error!(?variant, %err, "navbar links misconfigured"),
        }
        resolved
    })
}

/// Navigation bar without a mobile menu.
///
/// An empty or absent `links` attribute renders no entries; invalid JSON is
/// raised to the nearest error boundary.
#[component]
pub fn Navbar(
    #[props(default, into)] logo: String,
    #[props(default, into)] links: String,
    #[props(default, into)] background_color: String,
) -> Element {
    i18n::init();

    let scope = use_hook(StyleScope::generate);
    let model = use_navbar_model(
        NavbarAttributes {
            logo,
            links,
            background_color,
            ..Default::default()
        },
        NavbarVariant::Simple,
    )?;
    let css = style::navbar_css(&scope, &model.config, model.variant);

    rsx! {
        div { class: "{scope}",
            style { "{css}" }
            nav { class: scope.class("bar"),
                Logo { text: model.config.logo.clone() }
                LinkList { class: scope.class("links"), links: model.links.clone() }
                SearchBox { class: scope.class("search") }
            }
        }
    }
}

#[component]
pub(crate) fn Logo(text: String) -> Element {
    rsx! {
        a { href: "",
            h2 { "{text}" }
        }
    }
}

/// One `<li><a>` per link, in order. Indices are used as keys since names
/// and hrefs may repeat.
#[component]
pub(crate) fn LinkList(
    class: String,
    #[props(default)] id: Option<String>,
    #[props(default)] hidden: bool,
    #[props(default)] state: Option<String>,
    links: Vec<Link>,
) -> Element {
    rsx! {
        ul {
            class: "{class}",
            id,
            hidden,
            "data-state": state,
            for (idx, link) in links.iter().enumerate() {
                li { key: "{idx}",
                    a { href: "{link.href}", "{link.name}" }
                }
            }
        }
    }
}

/// Search input. Purely decorative; nothing listens to it.
#[component]
pub(crate) fn SearchBox(class: String) -> Element {
    rsx! {
        input {
            class: "{class}",
            r#type: "text",
            name: "search",
            placeholder: t!("search-placeholder"),
            aria_label: t!("search-label"),
        }
    }
}
