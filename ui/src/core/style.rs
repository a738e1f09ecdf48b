//! Per-instance scoped stylesheets.
//!
//! Every widget instance gets its own class name and all of its rules are
//! prefixed with it, so nothing leaks out to the host page. The output is
//! placed inside a `<style>` element and therefore avoids `<`, `>`, `&`
//! and quotes, which the SSR renderer would escape.

use std::fmt;

use uuid::Uuid;

use super::config::{NavbarConfig, NavbarVariant};

/// Class-name prefix for one widget instance, e.g. `navkit-3f2a9c01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleScope(String);

impl StyleScope {
    pub fn generate() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self(format!("navkit-{}", &id[..8]))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Element class inside this scope: `<scope>__<element>`.
    pub fn class(&self, element: &str) -> String {
        format!("{}__{element}", self.0)
    }
}

impl fmt::Display for StyleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const HOVER_COLOR: &str = "#097CBC";

pub fn navbar_css(scope: &StyleScope, config: &NavbarConfig, variant: NavbarVariant) -> String {
    let s = scope.name();
    let bg = &config.background_color;
    let mut css = format!(
        "\
.{s} {{ color: white; font-family: Roboto, sans-serif; }}
.{s} .{s}__bar {{ display: flex; justify-content: space-evenly; align-items: center; background-color: {bg}; height: 4rem; }}
.{s} .{s}__links {{ display: flex; height: 100%; flex-direction: row; padding: 0; margin: 0; }}
.{s} .{s}__links li {{ display: flex; height: 100%; margin-right: 0.5rem; list-style: none; }}
.{s} .{s}__links li a {{ display: flex; justify-content: space-evenly; align-items: center; height: 100%; color: white; text-decoration: none; padding: 0 0.5rem; }}
.{s} .{s}__links li a:hover {{ background: {HOVER_COLOR}; text-decoration: underline; }}
.{s} a {{ color: white; text-decoration: none; }}
.{s} .{s}__search {{ border-radius: 1rem; border: 1px solid {HOVER_COLOR}; padding: 0.8rem; height: 0.15rem; }}
"
    );

    if variant == NavbarVariant::Responsive {
        let bp = config.breakpoint;
        css.push_str(&format!(
            "\
.{s} .{s}__toggle {{ display: none; background: none; border: none; color: white; font-size: 1.5rem; cursor: pointer; }}
.{s} .{s}__menu {{ display: none; flex-direction: column; background-color: {bg}; padding: 0; margin: 0; }}
.{s} .{s}__menu li {{ list-style: none; }}
.{s} .{s}__menu li a {{ display: block; padding: 0.75rem 1rem; }}
.{s} .{s}__menu li a:hover {{ background: {HOVER_COLOR}; }}
.{s} .{s}__menu[hidden] {{ display: none; }}
@media (max-width: {bp}px) {{
  .{s} .{s}__links, .{s} .{s}__search {{ display: none; }}
  .{s} .{s}__toggle {{ display: block; }}
  .{s} .{s}__menu {{ display: flex; }}
}}
"
        ));
    }

    css
}

pub fn root_css(scope: &StyleScope) -> String {
    format!(".{scope} p {{ color: red; }}\n")
}
