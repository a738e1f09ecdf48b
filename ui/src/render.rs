//! Static markup for hosts that embed widgets into server-rendered pages.

use dioxus::prelude::*;

use crate::components::{Navbar, ResponsiveNavbar, RootElement, RootStatic};
use crate::core::config::{NavbarAttributes, NavbarConfig, NavbarModel, NavbarVariant};
use crate::core::error::ConfigurationError;

/// Render a navbar to HTML.
///
/// The attributes are resolved before any markup is produced, so a bad link
/// list comes back as an `Err` rather than as a half-rendered page. The
/// responsive variant is rendered in its initial, closed state.
pub fn render_navbar(
    attrs: &NavbarAttributes,
    variant: NavbarVariant,
) -> Result<String, ConfigurationError> {
    NavbarModel::resolve(NavbarConfig::from_attributes(attrs), variant)?;

    let NavbarAttributes {
        logo,
        links,
        background_color,
        breakpoint,
    } = attrs.clone();

    let html = match variant {
        NavbarVariant::Simple => dioxus_ssr::render_element(rsx! {
            Navbar { logo, links, background_color }
        }),
        NavbarVariant::Responsive => dioxus_ssr::render_element(rsx! {
            ResponsiveNavbar { logo, links, background_color, breakpoint }
        }),
    };
    Ok(html)
}

/// Render one of the root wrappers around `content`.
///
/// With `projected` the content lands in the slot of [`RootElement`];
/// otherwise [`RootStatic`] is used and the content is discarded.
pub fn render_root(content: Element, projected: bool) -> String {
    if projected {
        dioxus_ssr::render_element(rsx! {
            RootElement { {content} }
        })
    } else {
        dioxus_ssr::render_element(rsx! {
            RootStatic { {content} }
        })
    }
}
