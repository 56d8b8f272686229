use leptos::{either::EitherOf4, html, prelude::*};

use super::reveal::{use_reveal, Reveal};
use crate::motion::{words, Ease, Frame, Tween};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    #[default]
    P,
    Span,
}

/// Text whose words rise into place one after another.
#[component]
pub fn AnimatedText(
    #[prop(into)] text: String,
    #[prop(optional)] tag: TextTag,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.7)] duration: f64,
) -> impl IntoView {
    let scope = NodeRef::<html::Span>::new();
    use_reveal(
        scope,
        Reveal::new(
            Tween::new(Frame::new().y(20.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(duration)
                .delay(delay)
                .stagger(0.1)
                .ease(Ease::Power3Out),
        )
        .targets(".word"),
    );

    let inner = view! {
        <span class="contents" node_ref=scope>
            {words(&text)
                .into_iter()
                .map(|w| {
                    view! {
                        <span class="word inline-block mr-[0.25em] whitespace-nowrap">{w.to_string()}</span>
                    }
                })
                .collect_view()}
        </span>
    };

    match tag {
        TextTag::H1 => EitherOf4::A(view! { <h1 class=class>{inner}</h1> }),
        TextTag::H2 => EitherOf4::B(view! { <h2 class=class>{inner}</h2> }),
        TextTag::P => EitherOf4::C(view! { <p class=class>{inner}</p> }),
        TextTag::Span => EitherOf4::D(view! { <span class=class>{inner}</span> }),
    }
}
