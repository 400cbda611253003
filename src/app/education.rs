use leptos::{html, prelude::*};

use super::effects::{reveal_css, use_reveal_latch};
use super::SectionHeader;
use crate::content::{Accent, Icon, Portfolio};
use crate::fx::Reveal;
use crate::sections::SectionId;

#[component]
pub fn Education() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Education.threshold());
    let (active, set_active) = signal(0usize);

    view! {
        <section
            id=SectionId::Education.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader
                    visible
                    kicker="Academic Records"
                    title="EDUCATION_LOG"
                    accent=Accent::Cyan
                />
                <div class="relative">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-[2px] bg-green/20" />
                    {content
                        .education
                        .iter()
                        .enumerate()
                        .map(|(i, edu)| {
                            let card_class = move || {
                                if active.get() == i {
                                    "relative border-2 bg-black/60 p-6 transition-all duration-500 border-green shadow-[0_0_30px_rgba(0,255,65,0.2)]"
                                } else {
                                    "relative border-2 bg-black/60 p-6 transition-all duration-500 border-green/20 hover:border-green/50"
                                }
                            };
                            let reveal = if i % 2 == 0 {
                                Reveal::left(i as u32 * 200)
                            } else {
                                Reveal::right(i as u32 * 200)
                            };
                            view! {
                                <div
                                    class="relative mb-12 md:w-1/2 md:odd:pr-12 md:even:ml-auto md:even:pl-12"
                                    style=reveal_css(visible, reveal)
                                    on:mouseenter=move |_| set_active.set(i)
                                >
                                    <div class=card_class>
                                        <img
                                            src=edu.image.clone()
                                            alt=edu.institution.clone()
                                            class="w-full h-40 object-cover mb-4 opacity-60"
                                        />
                                        <div class="flex items-center gap-2 mb-2" style:color=edu.accent.hex()>
                                            <span>{Icon::Book.glyph()}</span>
                                            <h3 class="text-xl font-bold">{edu.institution.clone()}</h3>
                                        </div>
                                        <p class="text-lg mb-4">{edu.degree.clone()}</p>
                                        <div class="flex flex-wrap gap-4 text-xs text-muted mb-4">
                                            <span>{edu.years.clone()}</span>
                                            <span>{Icon::Pin.glyph()} " " {edu.location.clone()}</span>
                                            <span style:color=edu.accent.hex()>
                                                {Icon::Award.glyph()}
                                                " GPA: "
                                                {edu.gpa.clone()}
                                            </span>
                                        </div>
                                        <p class="text-xs text-muted uppercase tracking-wider mb-2">
                                            "Concentration Areas"
                                        </p>
                                        <div class="flex flex-wrap gap-2">
                                            {edu
                                                .concentration
                                                .iter()
                                                .map(|area| {
                                                    view! {
                                                        <span
                                                            class="px-2 py-1 text-xs border"
                                                            style:border-color=edu.accent.with_alpha("40")
                                                            style:color=edu.accent.hex()
                                                            style:background-color=edu.accent.with_alpha("10")
                                                        >
                                                            {area.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
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
