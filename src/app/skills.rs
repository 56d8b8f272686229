use leptos::{html, prelude::*};

use super::{
    reveal::{use_reveal, Reveal, NEAR_START},
    layout::SectionTitle,
};
use crate::{
    content::{Skill, SkillCategory},
    motion::{Ease, Frame, Tween},
};

#[component]
pub fn SkillsSection(categories: &'static [SkillCategory]) -> impl IntoView {
    let grid = NodeRef::<html::Div>::new();
    use_reveal(
        grid,
        Reveal::new(
            Tween::new(Frame::new().y(30.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.8)
                .stagger(0.2),
        )
        .targets(".skill-category")
        .on_scroll(NEAR_START),
    );

    view! {
        <section id="skills" class="py-20 bg-black/20">
            <div class="container-custom">
                <SectionTitle text="Technical Skills" />
                <div node_ref=grid class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10 mt-16">
                    {categories
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="skill-category bg-secondary rounded-lg p-6 shadow-lg">
                                    <h3 class="text-xl font-semibold mb-6 text-highlight">
                                        {category.title.as_str()}
                                    </h3>
                                    <div class="space-y-5">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <SkillBar skill=skill /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Fills to the skill's level the first time it scrolls into view.
#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let fill = NodeRef::<html::Div>::new();
    use_reveal(
        fill,
        Reveal::new(
            Tween::new(
                Frame::new().width(0.0),
                Frame::new().width(f64::from(skill.level.percent())),
            )
            .duration(1.5)
            .ease(Ease::Power3Out),
        )
        .on_scroll(NEAR_START),
    );

    view! {
        <div class="skill">
            <div class="flex justify-between mb-1">
                <span>{skill.name.as_str()}</span>
                <span class="text-lightText/60">{skill.level.label()}</span>
            </div>
            <div class="h-2 w-full bg-darkBg rounded-full overflow-hidden">
                <div
                    node_ref=fill
                    class="h-full rounded-full w-0"
                    style:background-color=skill.color()
                ></div>
            </div>
        </div>
    }
}
