use leptos::{html, prelude::*};

use super::{
    animated_text::{AnimatedText, TextTag},
    reveal::{use_reveal, Reveal},
    scroll::scroll_into_view,
};
use crate::motion::{Ease, Frame, Repeat, Tween};

fn rise(delay: f64) -> Tween {
    Tween::new(Frame::new().y(20.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
        .duration(0.8)
        .delay(delay)
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let subtitle = NodeRef::<html::P>::new();
    let cta = NodeRef::<html::Div>::new();
    let indicator = NodeRef::<html::Div>::new();

    use_reveal(subtitle, Reveal::new(rise(1.2)));
    use_reveal(cta, Reveal::new(rise(1.6)));
    // bobs forever once it has faded in
    use_reveal(
        indicator,
        Reveal::new(
            Tween::new(Frame::new().y(-10.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.8)
                .delay(2.2)
                .ease(Ease::Power1InOut)
                .repeat(Repeat::YoyoForever),
        ),
    );

    view! {
        <section class="min-h-screen flex flex-col justify-center items-center relative px-4">
            <div class="text-center max-w-4xl mx-auto">
                <AnimatedText
                    text="Software Developer"
                    class="text-xl font-light tracking-wider text-highlight mb-4"
                    delay=0.2
                    duration=0.5
                    tag=TextTag::P
                />
                <AnimatedText
                    text="Crafting Digital Experiences That Matter"
                    class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6"
                    delay=0.5
                    tag=TextTag::H1
                />
                <p node_ref=subtitle class="text-xl text-lightText/80 mb-8 max-w-2xl mx-auto">
                    "I design and build applications that are not just functional, but delightful to use. "
                    "Specializing in modern web technologies to create seamless digital experiences."
                </p>
                <div node_ref=cta class="flex justify-center gap-4">
                    <button class="btn-primary" on:click=move |_| scroll_into_view("projects")>
                        "View My Work"
                    </button>
                    <a
                        href="#contact"
                        class="border border-highlight text-highlight font-medium py-2 px-6 rounded-md hover:bg-highlight/10 transition-colors"
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div node_ref=indicator class="absolute bottom-12 flex flex-col items-center">
                <span class="text-sm text-lightText/60 mb-2">"Scroll to explore"</span>
                <i class="extra-chevron-down animate-bounce text-highlight text-2xl"></i>
            </div>
        </section>
    }
}
