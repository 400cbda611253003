use leptos::{html, prelude::*};

use super::effects::{use_reveal_latch, use_typewriter, MatrixRain};
use super::nav::scroll_to;
use crate::content::{Icon, Portfolio};
use crate::sections::SectionId;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let timings = content.timings;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Hero.threshold());

    let title = use_typewriter(content.hero.title.clone(), timings.title_tick_ms, 0, visible);
    let subtitle = use_typewriter(
        content.hero.subtitle.clone(),
        timings.subtitle_tick_ms,
        timings.subtitle_delay_ms,
        visible,
    );

    view! {
        <section
            id=SectionId::Hero.id()
            node_ref=section_ref
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <MatrixRain cell_px=timings.rain_cell_px />
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-background/50 to-background z-10" />
            <div class="relative z-20 text-center px-4 max-w-6xl mx-auto">
                <div class="animate-fade-in-up mb-8">
                    <div class="inline-flex items-center gap-2 px-4 py-2 border border-green/30 rounded-full bg-green/5">
                        <span class="w-2 h-2 bg-green rounded-full animate-pulse" />
                        <span class="text-xs text-green uppercase tracking-widest">
                            "System Online"
                        </span>
                    </div>
                </div>
                <h1
                    class="glitch text-5xl md:text-7xl lg:text-8xl font-bold mb-6 tracking-wider"
                    data-text=move || title.get()
                >
                    <span class="text-gradient">{move || title.get()}</span>
                    <span class="typing-cursor" />
                </h1>
                <p class="text-lg md:text-xl lg:text-2xl text-muted mb-8 tracking-[0.3em] uppercase">
                    {move || subtitle.get()}
                    <span class="typing-cursor" />
                </p>
                <p class="text-muted max-w-2xl mx-auto mb-12 text-base md:text-lg animate-fade-in-up">
                    {content.hero.tagline.clone()}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button class="cyber-button" on:click=move |_| scroll_to(SectionId::About)>
                        {Icon::Terminal.glyph()}
                        " [ INITIATE_PROTOCOL ]"
                    </button>
                    <a
                        href=SectionId::Contact.href()
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to(SectionId::Contact);
                        }
                        class="px-8 py-3 text-sm uppercase tracking-wider border border-cyan text-cyan hover:bg-cyan/10 transition-all duration-300"
                    >
                        {Icon::Lock.glyph()}
                        " ESTABLISH_CONNECTION"
                    </a>
                </div>
                <div class="grid grid-cols-3 gap-8 max-w-2xl mx-auto mt-16">
                    {content
                        .hero
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class="mb-2 text-xl" style:color=stat.accent.hex()>
                                        {stat.icon.glyph()}
                                    </div>
                                    <div
                                        class="text-2xl md:text-3xl font-bold"
                                        style:color=stat.accent.hex()
                                    >
                                        {stat.value.clone()}
                                    </div>
                                    <div class="text-xs text-muted uppercase tracking-wider">
                                        {stat.label.clone()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 z-20 animate-bounce text-green/50 hover:text-green transition-colors"
                on:click=move |_| scroll_to(SectionId::About)
                aria-label="Scroll to about"
            >
                "▼"
            </button>
        </section>
    }
}
