use leptos::{html, prelude::*};

use super::{
    reveal::{use_reveal, Reveal, FAR_START},
    layout::SectionTitle,
};
use crate::{
    content::{Orientation, Project},
    motion::{Frame, Tween},
};

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 container-custom">
            <SectionTitle text="Featured Projects" />
            <div class="mt-16">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    use_reveal(
        card,
        Reveal::new(
            Tween::new(Frame::new().y(50.0).opacity(0.0), Frame::new().y(0.0).opacity(1.0))
                .duration(0.8),
        )
        .on_scroll(FAR_START),
    );

    let class = format!(
        "flex flex-col {} gap-6 lg:gap-10 mb-24 last:mb-0 group",
        Orientation::for_index(index).flex_class()
    );

    view! {
        <div node_ref=card class=class>
            <div class="lg:w-3/5 overflow-hidden rounded-lg shadow-lg relative">
                <div class="absolute inset-0 bg-highlight/20 opacity-0 group-hover:opacity-100 transition-opacity duration-300 z-10"></div>
                <img
                    src=project.image_src.as_str()
                    alt=project.title.as_str()
                    class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-105"
                />
            </div>
            <div class="lg:w-2/5 flex flex-col justify-center">
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="text-highlight text-sm font-medium mb-2 flex items-center">
                                <i class="extra-code mr-2"></i>
                                "Featured Project"
                            </span>
                        }
                    })}
                <h3 class="text-2xl font-bold mb-3">{project.title.as_str()}</h3>
                <p class="text-lightText/70 mb-4">{project.description.as_str()}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-secondary text-lightText/80 text-xs font-semibold rounded-full px-2.5 py-0.5">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.live_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center text-highlight hover:underline"
                    >
                        <i class="extra-external-link mr-1"></i>
                        "Live Demo"
                    </a>
                    <a
                        href=project.github_url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center text-lightText/80 hover:text-highlight transition-colors"
                    >
                        <i class="devicon-github-plain mr-1"></i>
                        "Source Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
