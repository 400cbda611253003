use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{signal_throttled, use_window_scroll};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::{Icon, Portfolio};
use crate::sections::{is_scrolled, next_active, SectionId};

/// Smooth-scroll to a section anchor. Missing targets are ignored.
pub fn scroll_to(id: SectionId) {
    let Some(el) = document().get_element_by_id(id.id()) else {
        log::debug!("no element for #{}", id.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn section_tops() -> Vec<(SectionId, f64)> {
    let doc = document();
    SectionId::NAV
        .iter()
        .filter_map(|id| {
            doc.get_element_by_id(id.id())
                .map(|el| (*id, el.get_bounding_client_rect().top()))
        })
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let (_, scroll_y) = use_window_scroll();
    let scroll_y = signal_throttled(scroll_y, content.timings.scroll_throttle_ms as f64);
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<SectionId>);

    Effect::watch(
        move || scroll_y.get(),
        move |_, _, _| {
            set_active.update(|active| *active = next_active(*active, section_tops()));
        },
        false,
    );

    let go = move |id: SectionId| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            scroll_to(id);
            set_menu_open.set(false);
        }
    };

    let item_class = move |id: SectionId, base: &'static str| {
        move || {
            if active.get() == Some(id) {
                format!("{base} text-green")
            } else {
                format!("{base} text-muted hover:text-green")
            }
        }
    };

    view! {
        <nav class=move || {
            if is_scrolled(scroll_y.get()) {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-background/90 backdrop-blur-md border-b border-green/20"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=SectionId::Hero.href()
                        on:click=go(SectionId::Hero)
                        class="flex items-center gap-2 group"
                    >
                        <span class="text-2xl text-green group-hover:scale-110 transition-transform">
                            {Icon::Shield.glyph()}
                        </span>
                        <span class="hidden sm:block text-sm">
                            <span class="font-bold text-green">{content.owner.brand.clone()}</span>
                            <span>{content.owner.brand_suffix.clone()}</span>
                        </span>
                    </a>
                    <div class="hidden lg:flex items-center gap-1">
                        {SectionId::NAV
                            .iter()
                            .map(|id| {
                                let id = *id;
                                view! {
                                    <a
                                        href=id.href()
                                        on:click=go(id)
                                        class=item_class(
                                            id,
                                            "relative px-4 py-2 text-xs uppercase tracking-wider transition-all duration-300",
                                        )
                                    >
                                        <Show when=move || active.get() == Some(id)>
                                            <span class="absolute inset-0 bg-green/10 border border-green/30" />
                                        </Show>
                                        <span class="relative">{id.label()}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <a
                        href=SectionId::Contact.href()
                        on:click=go(SectionId::Contact)
                        class="hidden lg:block cyber-button text-xs py-2 px-4"
                    >
                        {Icon::Terminal.glyph()}
                        " CONNECT"
                    </a>
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="lg:hidden p-2 border border-green/30 hover:border-green text-green transition-colors"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>
        <div class=move || {
            if menu_open.get() {
                "fixed inset-0 z-40 lg:hidden transition-all duration-500 opacity-100 pointer-events-auto"
            } else {
                "fixed inset-0 z-40 lg:hidden transition-all duration-500 opacity-0 pointer-events-none"
            }
        }>
            <div
                class="absolute inset-0 bg-background/95 backdrop-blur-lg"
                on:click=move |_| set_menu_open.set(false)
            />
            <div class="relative h-full flex flex-col items-center justify-center gap-6">
                {SectionId::NAV
                    .iter()
                    .map(|id| {
                        let id = *id;
                        view! {
                            <a
                                href=id.href()
                                on:click=go(id)
                                class=item_class(
                                    id,
                                    "text-2xl uppercase tracking-wider transition-all duration-300",
                                )
                            >
                                {id.label()}
                            </a>
                        }
                    })
                    .collect_view()}
                <a href=SectionId::Contact.href() on:click=go(SectionId::Contact) class="mt-8 cyber-button">
                    {Icon::Terminal.glyph()}
                    " ESTABLISH_CONNECTION"
                </a>
            </div>
        </div>
    }
}
