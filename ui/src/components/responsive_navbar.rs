//! Navigation bar that collapses into a hamburger menu on narrow viewports.
//!
//! Below the breakpoint the stylesheet hides the primary list and search box
//! and shows the toggle; the toggle only flips [`MenuState`], which drives
//! the `hidden` flag of the stacked secondary list.

use dioxus::prelude::*;

use super::navbar::{use_navbar_model, LinkList, Logo, SearchBox};
use crate::core::config::{NavbarAttributes, NavbarVariant};
use crate::core::menu::MenuState;
use crate::core::style::{self, StyleScope};
use crate::i18n;
use crate::t;

/// Responsive navigation bar. `links` must be a non-empty JSON array.
#[component]
pub fn ResponsiveNavbar(
    #[props(default, into)] logo: String,
    #[props(default, into)] links: String,
    #[props(default, into)] background_color: String,
    #[props(default, into)] breakpoint: String,
) -> Element {
    i18n::init();

    let scope = use_hook(StyleScope::generate);
    let mut menu = use_signal(MenuState::default);
    let model = use_navbar_model(
        NavbarAttributes {
            logo,
            links,
            background_color,
            breakpoint,
        },
        NavbarVariant::Responsive,
    )?;
    let css = style::navbar_css(&scope, &model.config, model.variant);

    let state = menu();
    let expanded = state.is_open();
    let menu_id = scope.class("menu");

    let on_toggle = move |_: MouseEvent| {
        let next = menu.write().toggle();
        tracing::debug!(state = %next, "navbar menu toggled");
    };

    rsx! {
        div { class: "{scope}",
            style { "{css}" }
            nav { class: scope.class("bar"),
                Logo { text: model.config.logo.clone() }
                LinkList { class: scope.class("links"), links: model.links.clone() }
                SearchBox { class: scope.class("search") }
                button {
                    class: scope.class("toggle"),
                    r#type: "button",
                    aria_label: t!("menu-toggle-label"),
                    aria_controls: "{menu_id}",
                    aria_expanded: "{expanded}",
                    onclick: on_toggle,
                    "☰"
                }
            }
            LinkList {
                class: scope.class("menu"),
                id: menu_id.clone(),
                hidden: !state.secondary_menu_visible(),
                state: state.to_string(),
                links: model.links.clone(),
            }
        }
    }
}
