use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::effects::{reveal_css, use_reveal_latch};
use super::SectionHeader;
use crate::content::{Accent, Portfolio, Project};
use crate::fx::Reveal;
use crate::sections::{Carousel, SectionId, Slot};

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Projects.threshold());
    let carousel = RwSignal::new(Carousel::new(content.projects.len()));

    let UseTimeoutFnReturn { start: lock, .. } = use_timeout_fn(
        move |_: ()| carousel.update(Carousel::unlock),
        content.timings.carousel_lock_ms as f64,
    );
    let step = {
        let lock = lock.clone();
        move |f: fn(&mut Carousel) -> bool| {
            let lock = lock.clone();
            move |_: MouseEvent| {
                if carousel.try_update(f).unwrap_or(false) {
                    lock(());
                }
            }
        }
    };
    let select = move |i: usize| {
        if carousel.try_update(|c| c.select(i)).unwrap_or(false) {
            lock(());
        }
    };

    view! {
        <section
            id=SectionId::Projects.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader
                    visible
                    kicker="Security Operations"
                    title="PROJECT_LOGS"
                    accent=Accent::Cyan
                    blurb="Hands-on projects demonstrating expertise in forensics, cryptography, and machine learning for security applications."
                />
                <div class="relative" style=reveal_css(visible, Reveal::up(300))>
                    <button
                        on:click=step(Carousel::prev)
                        class="absolute left-0 top-1/2 -translate-y-1/2 z-20 p-3 border border-green/30 hover:border-green text-green bg-background/80"
                        aria-label="Previous project"
                    >
                        "◀"
                    </button>
                    <button
                        on:click=step(Carousel::next)
                        class="absolute right-0 top-1/2 -translate-y-1/2 z-20 p-3 border border-green/30 hover:border-green text-green bg-background/80"
                        aria-label="Next project"
                    >
                        "▶"
                    </button>
                    <div class="flex items-center justify-center gap-4 px-16" style="perspective: 1000px">
                        {content
                            .projects
                            .iter()
                            .enumerate()
                            .map(|(i, project)| {
                                let slot = Memo::new(move |_| carousel.with(|c| c.slot(i)));
                                ProjectCard(ProjectCardProps::builder().project(project).slot(slot).build())
                            })
                            .collect_view()}
                    </div>
                    <div class="flex justify-center gap-2 mt-8">
                        {(0..content.projects.len())
                            .map(|i| {
                                let select = select.clone();
                                view! {
                                    <button
                                        on:click=move |_| select(i)
                                        aria-label=format!("Show project {}", i + 1)
                                        class=move || {
                                            if carousel.with(|c| c.active() == i) {
                                                "w-3 h-3 transition-all duration-300 bg-green shadow-[0_0_10px_#00ff41]"
                                            } else {
                                                "w-3 h-3 transition-all duration-300 bg-green/30 hover:bg-green/50"
                                            }
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="mt-16" style=reveal_css(visible, Reveal::up(500))>
                    <div class="flex items-center gap-4 mb-6">
                        <div class="w-8 h-[2px] bg-cyan" />
                        <span class="text-sm text-cyan uppercase tracking-wider">
                            "Additional Operations"
                        </span>
                    </div>
                    <div class="grid md:grid-cols-2 gap-4">
                        {content
                            .side_projects
                            .iter()
                            .map(|p| {
                                view! {
                                    <div class="group p-4 border border-green/20 hover:border-green/60 transition-all duration-300 flex items-center gap-4">
                                        <span class="text-2xl text-green group-hover:scale-110 transition-transform">
                                            {p.icon.glyph()}
                                        </span>
                                        <div>
                                            <h4 class="text-sm font-bold group-hover:text-green transition-colors">
                                                {p.name.clone()}
                                            </h4>
                                            <p class="text-xs text-muted">{p.description.clone()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn slot_class(slot: Slot) -> &'static str {
    match slot {
        Slot::Active => "w-full max-w-3xl opacity-100 scale-100 z-10",
        Slot::Previous | Slot::Next => "hidden md:block md:w-64 opacity-40 scale-90",
        Slot::Hidden => "hidden",
    }
}

fn slot_transform(slot: Slot) -> &'static str {
    match slot {
        Slot::Previous => "rotateY(25deg) translateX(-50px)",
        Slot::Next => "rotateY(-25deg) translateX(50px)",
        Slot::Active | Slot::Hidden => "rotateY(0deg)",
    }
}

#[component]
fn ProjectCard(project: &'static Project, slot: Memo<Slot>) -> impl IntoView {
    let accent = project.accent;

    view! {
        <div
            class=move || format!("transition-all duration-500 {}", slot_class(slot.get()))
            style:transform=move || slot_transform(slot.get())
        >
            <div class=move || {
                if slot.get() == Slot::Active {
                    "border-2 bg-black/60 overflow-hidden border-green shadow-[0_0_40px_rgba(0,255,65,0.2)]"
                } else {
                    "border-2 bg-black/60 overflow-hidden border-green/20"
                }
            }>
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-48 object-cover opacity-70"
                />
                <div class="p-6">
                    <div class="flex items-center gap-3 mb-4" style:color=accent.hex()>
                        <span class="text-2xl">{project.icon.glyph()}</span>
                        <h3 class="text-xl font-bold">{project.title.clone()}</h3>
                    </div>
                    <Show when=move || slot.get() == Slot::Active>
                        <p class="text-sm text-muted mb-4">{project.description.clone()}</p>
                        <ul class="space-y-1 mb-4 text-sm">
                            {project
                                .features
                                .iter()
                                .map(|f| {
                                    view! {
                                        <li>
                                            <span style:color=accent.hex()>"> "</span>
                                            {f.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex flex-wrap gap-2 mb-4">
                            {project
                                .tags
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span
                                            class="px-2 py-1 text-xs border"
                                            style:border-color=accent.with_alpha("40")
                                            style:color=accent.hex()
                                        >
                                            {t.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {project
                            .repo
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center gap-2 text-sm text-cyan hover:underline"
                                    >
                                        <i class="devicon-github-plain" />
                                        " VIEW_SOURCE"
                                    </a>
                                }
                            })}
                    </Show>
                </div>
            </div>
        </div>
    }
}
