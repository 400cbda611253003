use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::nav::scroll_to;
use crate::content::{Link, Portfolio};
use crate::sections::SectionId;

/// Build date for the footer, `YYYY-MM-DD`, or the raw stamp if it won't parse.
fn compiled_on() -> String {
    let raw = env!("BUILD_TIME");
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn section_for(href: &str) -> Option<SectionId> {
    let id = href.strip_prefix('#')?;
    SectionId::NAV.into_iter().find(|s| s.id() == id)
}

#[component]
fn FooterLink(link: &'static Link) -> impl IntoView {
    match section_for(&link.href) {
        Some(section) => view! {
            <a
                href=section.href()
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to(section);
                }
                class="text-sm text-muted hover:text-green transition-colors"
            >
                "> "
                {link.label.clone()}
            </a>
        }
        .into_any(),
        None => view! {
            <a href=link.href.clone() class="text-sm text-muted hover:text-green transition-colors">
                "> "
                {link.label.clone()}
            </a>
        }
        .into_any(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let footer = &content.footer;
    let year = Utc::now().year();

    view! {
        <footer class="relative z-10 border-t border-green/20 bg-black/60 py-12 px-4">
            <div class="max-w-7xl mx-auto grid md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-xl font-bold mb-4">
                        <span class="text-green">{content.owner.brand.clone()}</span>
                        <span class="text-cyan">{content.owner.brand_suffix.clone()}</span>
                    </h3>
                    <p class="text-sm text-muted mb-4">{footer.blurb.clone()}</p>
                    <div class="flex gap-3">
                        {footer
                            .socials
                            .iter()
                            .map(|link| {
                                let target = link.is_external().then_some("_blank");
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target=target
                                        rel=target.map(|_| "noopener noreferrer")
                                        aria-label=link.label.clone()
                                        class="p-2 border border-green/30 text-green hover:border-green hover:bg-green/10 transition-colors"
                                    >
                                        {match link.icon.devicon() {
                                            Some(class) => view! { <i class=class /> }.into_any(),
                                            None => link.icon.glyph().into_any(),
                                        }}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <h4 class="text-sm text-cyan uppercase tracking-wider mb-4">"Quick Links"</h4>
                    <nav class="flex flex-col gap-2">
                        {footer
                            .quick_links
                            .iter()
                            .map(|link| view! { <FooterLink link /> })
                            .collect_view()}
                    </nav>
                </div>
                <div>
                    <h4 class="text-sm text-cyan uppercase tracking-wider mb-4">"System Status"</h4>
                    <ul class="space-y-2 text-sm">
                        <li class="flex items-center gap-2">
                            <span class="w-2 h-2 rounded-full bg-green animate-pulse" />
                            <span class="text-green">"ONLINE"</span>
                        </li>
                        {footer
                            .status
                            .iter()
                            .map(|s| {
                                view! {
                                    <li class="flex items-center gap-2 text-muted">
                                        <span class="w-2 h-2 rounded-full bg-cyan" />
                                        {s.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto mt-8 pt-8 border-t border-green/10 flex flex-col md:flex-row justify-between gap-2 text-xs text-muted">
                <span>{format!("© {year} {}. All rights reserved.", content.owner.name)}</span>
                <span>{format!("last compiled {}", compiled_on())}</span>
            </div>
        </footer>
    }
}
