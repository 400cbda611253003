use leptos::{html, prelude::*};

use super::effects::{reveal_css, use_decrypt, use_reveal_latch};
use super::SectionHeader;
use crate::content::Portfolio;
use crate::fx::Reveal;
use crate::sections::SectionId;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let timings = content.timings;
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::About.threshold());
    let bio = use_decrypt(
        &content.about.bio,
        timings.decrypt_tick_ms,
        timings.decrypt_stride,
        visible,
    );

    view! {
        <section
            id=SectionId::About.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4 overflow-hidden"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader visible kicker="Identity Verification" title="IDENTITY_VERIFY" />
                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div class="relative" style=reveal_css(visible, Reveal::left(300))>
                        <div class="relative overflow-hidden border-2 border-green/30 group">
                            <div class="absolute inset-0 scan-line z-10 pointer-events-none" />
                            <img
                                src=content.about.photo.clone()
                                alt="Profile"
                                class="w-full max-w-md mx-auto object-cover transition-transform duration-700 group-hover:scale-105"
                            />
                        </div>
                        <div class="absolute -bottom-4 -right-4 bg-black border border-green px-4 py-2">
                            <span class="text-xs text-green">"STATUS: ACTIVE"</span>
                        </div>
                    </div>
                    <div style=reveal_css(visible, Reveal::right(500))>
                        <div class="mb-8">
                            <div class="flex items-center gap-2 mb-4">
                                <span class="w-2 h-2 bg-cyan rounded-full animate-pulse" />
                                <span class="text-xs text-cyan">"DECRYPTING_PROFILE..."</span>
                            </div>
                            <div class="text-sm md:text-base leading-relaxed whitespace-pre-line border-l-2 border-green/30 pl-4">
                                {move || bio.get()}
                                <span class="terminal-cursor text-green" />
                            </div>
                        </div>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {content
                                .about
                                .highlights
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="group relative p-4 border border-green/20 hover:border-green/60 transition-all duration-300">
                                            <div class="mb-2" style:color=item.accent.hex()>
                                                {item.icon.glyph()}
                                            </div>
                                            <div class="text-xl font-bold" style:color=item.accent.hex()>
                                                {item.value.clone()}
                                            </div>
                                            <div class="text-xs text-muted uppercase tracking-wider">
                                                {item.label.clone()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
