//! Navkit widget library: a navigation bar (simple and responsive) and a
//! decorative root wrapper, built as Dioxus components with scoped styles.

pub mod core;
pub mod i18n;
pub mod render;

pub mod components {
    // Simple navbar plus the pieces the responsive one reuses (components/navbar.rs)
    pub mod navbar;
    pub use navbar::Navbar;

    // Hamburger-menu variant (components/responsive_navbar.rs)
    pub mod responsive_navbar;
    pub use responsive_navbar::ResponsiveNavbar;

    // Root wrappers with and without content projection (components/root.rs)
    pub mod root;
    pub use root::{RootElement, RootStatic};
}

pub use crate::core::config::{NavbarAttributes, NavbarConfig, NavbarModel, NavbarVariant};
pub use crate::core::error::ConfigurationError;
pub use crate::core::links::{parse_links, Link, LinkPolicy};
pub use crate::core::menu::MenuState;
