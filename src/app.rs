mod animated_text;
mod contact;
mod hero;
mod layout;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod toast;

use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use crate::content::{portfolio, ContentError};
use contact::ContactSection;
use hero::HeroSection;
use layout::Layout;
use projects::ProjectsSection;
use skills::SkillsSection;

/// Brand glyphs (`devicon-*` classes). Line icons (`extra-*`) are defined in `input.css`.
const DEVICON_STYLESHEET: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <MetaTags />
            </head>
            <body class="bg-darkBg text-lightText antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content="Software developer portfolio: projects, skills and contact." />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Renders the home page of your application.
#[component]
fn HomePage() -> impl IntoView {
    // Smooth-scroll any in-page anchor that no other handler claimed.
    let _ = use_event_listener(use_document(), leptos::ev::click, |ev: MouseEvent| {
        if ev.default_prevented() {
            return;
        }
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if href == "#" {
            return;
        }
        ev.prevent_default();
        scroll::scroll_to_href(&href);
    });

    let sections = match portfolio() {
        Ok(p) => Either::Left(view! {
            <ProjectsSection projects=p.projects.as_slice() />
            <SkillsSection categories=p.skills.as_slice() />
        }),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            Either::Right(view! { <ContentUnavailable error=e /> })
        }
    };

    view! {
        <Layout>
            <HeroSection />
            {sections}
            <ContactSection />
        </Layout>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    view! {
        <section class="py-20 container-custom text-center">
            <p class="text-lightText/60">"Projects and skills are unavailable right now."</p>
            <p class="text-sm text-lightText/40 mt-2">{error.to_string()}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../input.css");
    const COMPONENTS: [&str; 4] = [
        include_str!("app/hero.rs"),
        include_str!("app/projects.rs"),
        include_str!("app/contact.rs"),
        include_str!("app/layout.rs"),
    ];

    fn classes_with_prefix<'a>(source: &'a str, prefix: &str) -> Vec<&'a str> {
        source
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .filter(|token| token.starts_with(prefix) && token.len() > prefix.len())
            .collect()
    }

    #[test]
    fn test_line_icons_have_rules() {
        let used: Vec<_> = COMPONENTS
            .iter()
            .flat_map(|source| classes_with_prefix(source, "extra-"))
            .collect();
        assert!(used.contains(&"extra-chevron-down"));
        assert!(used.contains(&"extra-download"));
        for class in used {
            assert!(
                STYLESHEET.contains(&format!(".{class} {{")),
                "no rule for {class}"
            );
        }
    }

    #[test]
    fn test_icon_rules_draw_with_a_mask() {
        assert!(STYLESHEET.contains("[class^=\"extra-\"]"));
        assert!(STYLESHEET.contains("mask: var(--extra-icon)"));
        assert!(STYLESHEET.contains("background-color: currentColor"));
    }

    #[test]
    fn test_brand_icons_have_a_stylesheet() {
        let used = COMPONENTS
            .iter()
            .flat_map(|source| classes_with_prefix(source, "devicon-"))
            .count();
        assert!(used > 0);
        assert!(super::DEVICON_STYLESHEET.starts_with("https://"));
        assert!(super::DEVICON_STYLESHEET.ends_with("/devicon.min.css"));
    }
}
