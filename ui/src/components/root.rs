//! Decorative root wrappers.

use dioxus::prelude::*;

use crate::core::style::{self, StyleScope};
use crate::i18n;
use crate::t;

/// Decorative frame that projects its children, unmodified, between the
/// heading and the closing line.
#[component]
pub fn RootElement(children: Element) -> Element {
    i18n::init();

    let scope = use_hook(StyleScope::generate);
    let css = style::root_css(&scope);

    rsx! {
        div { class: "{scope}",
            style { "{css}" }
            p { {t!("root-heading")} }
            div { class: scope.class("slot"), {children} }
            p { {t!("root-ending")} }
        }
    }
}

/// Same frame without a projection point. Children are dropped.
#[component]
pub fn RootStatic(children: Element) -> Element {
    i18n::init();

    let _ = children;
    let scope = use_hook(StyleScope::generate);
    let css = style::root_css(&scope);

    rsx! {
        div { class: "{scope}",
            style { "{css}" }
            p { {t!("root-heading")} }
            p { {t!("root-ending")} }
        }
    }
}
