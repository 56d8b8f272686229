use chrono::{Datelike, Utc};
use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

use super::{
    reveal::{query_all, use_reveal, Reveal, TimelinePlayer, WindowScroll, FAR_START},
    scroll::scroll_to_href,
    toast::{Toaster, ToastViewport},
};
use crate::{
    content::{portfolio, RESUME_FILE_NAME},
    motion::{Frame, Tween},
    state::{
        closed_panel_style, menu_timeline,
        nav::{is_scrolled, NAV_ITEMS},
        MenuState,
    },
};

// The panel's offset comes from the menu timeline alone.
const PANEL_CLASS: &str =
    "mobile-menu fixed inset-0 bg-darkBg md:hidden z-40 flex items-center justify-center";

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    Toaster::provide();
    WindowScroll::provide();

    view! {
        <Nav />
        <main>{children()}</main>
        <Footer />
        <ToastViewport />
    }
}

#[component]
fn Nav() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let scroll_y = WindowScroll::use_y();
    let panel = NodeRef::<html::Div>::new();
    let player = TimelinePlayer::new(menu_timeline(NAV_ITEMS.len()));

    Effect::new(move |_| {
        let state = menu.get();
        if !player.is_attached() {
            let Some(panel) = panel.get() else {
                return;
            };
            let links = query_all(&panel, ".mobile-menu-link");
            player.attach(vec![vec![HtmlElement::from(panel)], links]);
        }
        player.run(state.timeline_direction());
        if let Some(body) = document().body() {
            if let Err(e) = body.style().set_property("overflow", state.body_overflow()) {
                log::warn!("couldn't toggle page scrolling: {e:?}");
            }
        }
    });

    let follow = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        menu.update(|m| *m = m.closed());
        scroll_to_href(href);
    };

    let nav_class = move || {
        if is_scrolled(scroll_y.get()) {
            "fixed top-0 left-0 right-0 z-50 px-6 py-4 transition-all duration-300 nav-scrolled"
        } else {
            "fixed top-0 left-0 right-0 z-50 px-6 py-4 transition-all duration-300"
        }
    };
    let bar = move |open: &'static str, closed: &'static str| {
        move || {
            let state = if menu.get().is_open() { open } else { closed };
            format!("block w-6 h-0.5 bg-white transition-all duration-300 {state}")
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <a href="#" class="text-2xl font-bold text-highlight" on:click=move |ev| follow(ev, "#")>
                    "Portfolio"
                </a>
                <ul class="hidden md:flex space-x-10">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.href
                                        class="nav-link text-lightText/80 hover:text-highlight transition-colors"
                                        on:click=move |ev| follow(ev, item.href)
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden flex flex-col justify-center items-center w-8 h-8 space-y-1.5 z-50"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| *m = m.toggled())
                >
                    <span class=bar("rotate-45 translate-y-2", "")></span>
                    <span class=bar("opacity-0", "opacity-100")></span>
                    <span class=bar("-rotate-45 -translate-y-2", "")></span>
                </button>
            </div>
            <div
                node_ref=panel
                class=PANEL_CLASS
                style=closed_panel_style()
            >
                <ul class="flex flex-col items-center space-y-8 text-2xl">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="mobile-menu-link">
                                    <a
                                        href=item.href
                                        class="text-lightText hover:text-highlight transition-colors"
                                        on:click=move |ev| follow(ev, item.href)
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Heading shared by the page sections; rises into place when scrolled to.
#[component]
pub fn SectionTitle(#[prop(into)] text: String) -> impl IntoView {
    let title = NodeRef::<html::H2>::new();
    use_reveal(
        title,
        Reveal::new(
            Tween::new(Frame::new().y(20.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.8),
        )
        .on_scroll(FAR_START),
    );

    view! {
        <h2 node_ref=title class="section-title">
            {text}
        </h2>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-black">
            <div class="container-custom">
                <div class="flex flex-col items-center space-y-4">
                    <button
                        class="flex items-center space-x-2 bg-highlight text-darkBg px-4 py-2 rounded-md hover:opacity-90 transition-opacity"
                        on:click=move |_| download_resume()
                    >
                        <i class="extra-download"></i>
                        <span>"Download Resume"</span>
                    </button>
                    <p class="text-lightText/60">
                        {format!("© {} Portfolio. All rights reserved.", Utc::now().year())}
                    </p>
                </div>
            </div>
        </footer>
    }
}

fn download_resume() {
    let resume = match portfolio() {
        Ok(p) => &p.resume,
        Err(e) => {
            log::error!("no resume to download: {e}");
            return;
        }
    };
    if let Err(e) = save_text(resume, RESUME_FILE_NAME) {
        log::warn!("resume download failed: {e:?}");
    }
}

/// Hands `text` to the browser as a download named `file_name`.
fn save_text(text: &str, file_name: &str) -> Result<(), JsValue> {
    let opts = BlobPropertyBag::new();
    opts.set_type("text/plain");
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link = document()
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(file_name);
    let body = document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&link)?;
    link.click();
    link.remove();
    Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::PANEL_CLASS;
    use crate::state::closed_panel_style;

    #[test]
    fn test_panel_offset_is_inline_only() {
        assert!(!PANEL_CLASS.split_whitespace().any(|c| c.starts_with("translate-")));
        assert!(closed_panel_style().starts_with("translate: 100%"));
    }
}
