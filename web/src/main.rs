use dioxus::prelude::*;

use ui::components::{Navbar, ResponsiveNavbar, RootElement, RootStatic};

const MAIN_CSS: Asset = asset!("/assets/main.css");

const DEMO_LINKS: &str = r#"[
    { "name": "Getting Started", "href": "/getting-started" },
    { "name": "Components", "href": "/components" },
    { "name": "Theming", "href": "/theming" },
    { "name": "About", "href": "/about" }
]"#;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main { class: "demo",
            section { class: "demo__section",
                h1 { "Navbar" }
                Navbar { logo: "Navkit", links: DEMO_LINKS }
            }
            section { class: "demo__section",
                h1 { "ResponsiveNavbar" }
                p { "Narrow the window below 640px to collapse the links into the menu." }
                ResponsiveNavbar {
                    logo: "Navkit",
                    links: DEMO_LINKS,
                    background_color: "#2D3142",
                    breakpoint: "640",
                }
            }
            section { class: "demo__section",
                h1 { "RootElement" }
                RootElement {
                    p { class: "demo__projected", "This paragraph is projected into the slot." }
                }
                RootStatic {
                    p { "This paragraph is ignored." }
                }
            }
        }
    }
}
