use leptos::{html, prelude::*};

use super::effects::{reveal_css, use_mount_gate, use_reveal_latch};
use super::SectionHeader;
use crate::content::{Accent, Icon, Portfolio, Skill};
use crate::fx::Reveal;
use crate::sections::{filter_skills, CategoryFilter, SectionId};

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Skills.threshold());
    let (filter, set_filter) = signal(CategoryFilter::All);

    let filters = std::iter::once(CategoryFilter::All)
        .chain(
            content
                .skill_categories
                .iter()
                .map(|c| CategoryFilter::Only(c.clone())),
        )
        .collect::<Vec<_>>();

    view! {
        <section
            id=SectionId::Skills.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader
                    visible
                    kicker="Technical Arsenal"
                    title="SKILL_MATRIX"
                    blurb="A comprehensive toolkit honed through 1000+ hours of hands-on lab work, certifications, and real-world security projects."
                />
                <div class="flex flex-wrap gap-2 mb-12" style=reveal_css(visible, Reveal::up(200))>
                    {filters
                        .into_iter()
                        .map(|f| {
                            let label = f.label().to_string();
                            let this = f.clone();
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(f.clone())
                                    class=move || {
                                        if filter.with(|cur| *cur == this) {
                                            "px-4 py-2 text-xs uppercase tracking-wider border transition-all duration-300 bg-green/20 border-green text-green"
                                        } else {
                                            "px-4 py-2 text-xs uppercase tracking-wider border transition-all duration-300 border-green/30 text-muted hover:border-green/60 hover:text-green"
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        filter
                            .with(|f| filter_skills(&content.skills, f))
                            .into_iter()
                            .enumerate()
                            .map(|(i, skill)| view! { <SkillCard skill index=i visible /> })
                            .collect_view()
                    }}
                </div>
                <div class="mt-16" style=reveal_css(visible, Reveal::up(500))>
                    <div class="flex items-center gap-4 mb-6 text-cyan">
                        <span>{Icon::Shield.glyph()}</span>
                        <h3 class="text-xl">"KALI_LINUX_TOOLCHAIN"</h3>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        {content
                            .toolchain
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="px-3 py-1 text-sm border border-cyan/30 text-cyan hover:bg-cyan/10 transition-colors">
                                        "$ "
                                        {tool.clone()}
                                    </span>
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
fn SkillCard(skill: &'static Skill, index: usize, visible: Signal<bool>) -> impl IntoView {
    // cards are rebuilt on every filter change, after the section has flipped
    let visible = use_mount_gate(visible);
    let (hovered, set_hovered) = signal(false);
    let accent: Accent = skill.accent;
    let level = skill.level.min(100);
    let bar_delay = index as u32 * 100;

    view! {
        <div style=reveal_css(visible, Reveal::up(index as u32 * 50))>
            <div
                class="group relative h-full p-6 border bg-black/40 transition-colors duration-300"
                style:border-color=move || {
                    if hovered.get() { accent.hex().to_string() } else { accent.with_alpha("30") }
                }
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <div class="flex items-center justify-between mb-4">
                    <span
                        class="px-2 py-1 text-xs uppercase"
                        style:background-color=accent.with_alpha("20")
                        style:color=accent.hex()
                    >
                        {skill.category.clone()}
                    </span>
                </div>
                <h3 class="text-lg font-bold mb-4">{skill.name.clone()}</h3>
                <div class="relative h-1 bg-black overflow-hidden">
                    <div
                        class="absolute inset-y-0 left-0 transition-all duration-1000 ease-out"
                        style:width=move || {
                            if visible.get() { format!("{level}%") } else { "0%".to_string() }
                        }
                        style:background-color=accent.hex()
                        style:transition-delay=format!("{bar_delay}ms")
                    />
                </div>
                <div class="flex justify-between mt-2 text-xs">
                    <span class="text-muted">"Proficiency"</span>
                    <span style:color=accent.hex()>{format!("{level}%")}</span>
                </div>
            </div>
        </div>
    }
}
