use leptos::{ev::SubmitEvent, html, prelude::*};
use web_sys::Element;

use super::{
    reveal::{use_reveal, Reveal, NEAR_START},
    layout::SectionTitle,
    toast::use_toaster,
};
use crate::{
    motion::{Ease, Frame, Tween},
    state::{ContactForm, Field, SUBMIT_LATENCY},
};

const EMAIL: &str = "altayebm804@gmail.com";
const PHONE: &str = "+20 1124912436";

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-secondary border border-secondary rounded-md focus:outline-none focus:ring-2 focus:ring-highlight";

struct SocialLink {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/mahmoudaltayeb",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/mahmoud-altayeb/",
        icon: "devicon-linkedin-plain",
    },
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = NodeRef::<html::Div>::new();
    let socials = NodeRef::<html::Div>::new();
    use_reveal(
        content,
        Reveal::new(
            Tween::new(Frame::new().y(30.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.8)
                .stagger(0.2)
                .ease(Ease::Power3Out),
        )
        .targets(":scope > div")
        .on_scroll(NEAR_START),
    );
    use_reveal(
        socials,
        Reveal::new(
            Tween::new(Frame::new().y(10.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.5)
                .delay(0.6)
                .stagger(0.1)
                .ease(Ease::Power3Out),
        )
        .targets(".social-link")
        .on_scroll(NEAR_START),
    );

    view! {
        <section id="contact" class="py-20 container-custom">
            <SectionTitle text="Get In Touch" />
            <div node_ref=content class="mt-16 grid grid-cols-1 lg:grid-cols-2 gap-12">
                <div>
                    <MessageForm />
                </div>
                <div class="lg:pl-10">
                    <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                    <div class="space-y-6">
                        <ContactLine icon="extra-email" label="Email" href=format!("mailto:{EMAIL}") text=EMAIL />
                        <ContactLine
                            icon="extra-phone"
                            label="Phone"
                            href=format!("tel:{}", PHONE.replace(' ', ""))
                            text=PHONE
                        />
                    </div>
                    <h3 class="text-2xl font-semibold mt-10 mb-6">"Connect"</h3>
                    <div node_ref=socials class="flex space-x-5">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="social-link bg-secondary hover:bg-highlight/20 transition-colors duration-300 p-3 rounded-full"
                                    >
                                        <i class=format!("{} text-xl", link.icon)></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(
    icon: &'static str,
    label: &'static str,
    href: String,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-start">
            <i class=format!("{icon} text-highlight mr-4 mt-1")></i>
            <div>
                <h4 class="font-medium">{label}</h4>
                <a href=href class="text-lightText/70 hover:text-highlight transition-colors">
                    {text}
                </a>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let toaster = use_toaster();

    let value = move |field: Field| form.with(|f| f.draft().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let Some(field) = event_target::<Element>(&ev)
            .get_attribute("name")
            .and_then(|name| name.parse::<Field>().ok())
        else {
            return;
        };
        let text = event_target_value(&ev);
        form.update(|f| f.update(field, text));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::submit) {
            Some(Ok(())) => set_timeout(
                move || {
                    if let Some(Some(ack)) = form.try_update(ContactForm::finish) {
                        toaster.show(ack);
                    }
                },
                SUBMIT_LATENCY,
            ),
            Some(Err(e)) => log::debug!("ignoring submit: {e}"),
            None => {}
        }
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div>
                <label for="name" class="block text-sm font-medium mb-2">"Name"</label>
                <input
                    type="text"
                    id="name"
                    name=Field::Name.as_str()
                    required
                    class=INPUT_CLASS
                    placeholder="Your name"
                    prop:value=move || value(Field::Name)
                    on:input=on_input
                />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium mb-2">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name=Field::Email.as_str()
                    required
                    class=INPUT_CLASS
                    placeholder="your.email@example.com"
                    prop:value=move || value(Field::Email)
                    on:input=on_input
                />
            </div>
            <div>
                <label for="message" class="block text-sm font-medium mb-2">"Message"</label>
                <textarea
                    id="message"
                    name=Field::Message.as_str()
                    required
                    rows=6
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Your message..."
                    prop:value=move || value(Field::Message)
                    on:input=on_input
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=submitting
                class=move || {
                    if submitting() {
                        "btn-primary w-full flex items-center justify-center opacity-70 cursor-not-allowed"
                    } else {
                        "btn-primary w-full flex items-center justify-center"
                    }
                }
            >
                {move || form.with(ContactForm::button_label)}
            </button>
        </form>
    }
}
