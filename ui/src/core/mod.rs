//! Platform-agnostic widget logic: attribute resolution, link parsing,
//! menu state and scoped styles. Nothing in here touches Dioxus.

pub mod config;
pub mod error;
pub mod links;
pub mod menu;
pub mod style;
