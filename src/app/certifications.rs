use leptos::{html, prelude::*};

use super::effects::{reveal_css, use_reveal_latch};
use super::SectionHeader;
use crate::content::{Accent, Certification, Portfolio};
use crate::fx::Reveal;
use crate::sections::SectionId;

#[component]
pub fn Certifications() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Certifications.threshold());

    view! {
        <section
            id=SectionId::Certifications.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader
                    visible
                    kicker="Credentials"
                    title="CERTIFICATIONS"
                    accent=Accent::Red
                />
                <div class="grid md:grid-cols-2 gap-6 mb-16">
                    {content
                        .certifications
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! { <CertCard cert visible delay_ms={i as u32 * 150} /> }
                        })
                        .collect_view()}
                </div>
                <div class="grid lg:grid-cols-2 gap-8">
                    <div style=reveal_css(visible, Reveal::left(600))>
                        <h3 class="text-lg font-bold text-cyan mb-4">"> TRAINING_LOG"</h3>
                        <ul class="space-y-3">
                            {content
                                .trainings
                                .iter()
                                .map(|t| {
                                    view! {
                                        <li class="flex items-start gap-3 p-3 border border-cyan/20 hover:border-cyan/60 transition-colors">
                                            <span class="text-cyan">"▸"</span>
                                            <div>
                                                <p class="text-sm font-bold">{t.name.clone()}</p>
                                                <p class="text-xs text-muted">{t.provider.clone()}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div style=reveal_css(visible, Reveal::right(800))>
                        <h3 class="text-lg font-bold text-green mb-4">"> ACTIVITIES"</h3>
                        <ul class="space-y-3">
                            {content
                                .activities
                                .iter()
                                .map(|a| {
                                    view! {
                                        <li class="p-4 border border-green/20 hover:border-green/60 transition-colors">
                                            <p class="text-sm font-bold text-green">{a.name.clone()}</p>
                                            <p class="text-xs text-muted mt-1">{a.description.clone()}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertCard(cert: &'static Certification, visible: Signal<bool>, delay_ms: u32) -> impl IntoView {
    let accent = cert.accent;
    let badge = if cert.status.is_finished() {
        "px-2 py-1 text-xs border border-green/60 text-green"
    } else {
        "px-2 py-1 text-xs border border-red/60 text-red animate-pulse"
    };

    view! {
        <div style=reveal_css(visible, Reveal::up(delay_ms))>
            <div
                class="group h-full p-6 border bg-black/40 transition-all duration-300 hover:-translate-y-1"
                style:border-color=accent.with_alpha("40")
            >
                <div class="flex items-start justify-between gap-4 mb-4">
                    <div class="flex items-center gap-3" style:color=accent.hex()>
                        <span class="text-3xl">{cert.icon.glyph()}</span>
                        <div>
                            <h3 class="font-bold">{cert.name.clone()}</h3>
                            <p class="text-xs text-muted">{cert.provider.clone()}</p>
                        </div>
                    </div>
                    <span class=badge>{cert.status.label()}</span>
                </div>
                <p class="text-sm text-muted">{cert.description.clone()}</p>
                {cert
                    .date
                    .clone()
                    .map(|d| view! { <p class="text-xs mt-4" style:color=accent.hex()>{d}</p> })}
            </div>
        </div>
    }
}
