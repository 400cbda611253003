use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::effects::{reveal_css, use_reveal_latch};
use super::SectionHeader;
use crate::contact::{ContactMessage, FormState, Transmission};
use crate::content::{Accent, Portfolio};
use crate::fx::Reveal;
use crate::sections::SectionId;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-black/60 border border-green/30 focus:border-green focus:outline-none text-foreground placeholder:text-muted disabled:opacity-50";

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<&'static Portfolio>();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal_latch(section_ref, SectionId::Contact.threshold());

    let transmission = RwSignal::new(Transmission::new());
    let state = Memo::new(move |_| transmission.with(Transmission::state));
    let sending = move || state.get() == FormState::Sending;

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let UseTimeoutFnReturn { start: transmit, .. } = use_timeout_fn(
        move |_: ()| {
            if transmission.try_update(Transmission::complete).unwrap_or(false) {
                log::info!("contact transmission complete");
            }
        },
        content.timings.transmit_delay_ms as f64,
    );
    let transmit = StoredValue::new(transmit);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let msg = ContactMessage {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        let result = transmission
            .try_update(|tx| match tx.submit(&msg) {
                Ok(()) => Ok(()),
                Err(e) => {
                    tx.reject(&e);
                    Err(e)
                }
            });
        match result {
            Some(Ok(())) => {
                log::info!("contact transmission queued");
                transmit.with_value(|start| start(()));
            }
            Some(Err(e)) => log::warn!("contact form rejected: {e}"),
            None => {}
        }
    };

    view! {
        <section
            id=SectionId::Contact.id()
            node_ref=section_ref
            class="relative min-h-screen py-24 px-4"
        >
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader visible kicker="Establish Connection" title="SECURE_CHANNEL" accent=Accent::Cyan />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div style=reveal_css(visible, Reveal::left(200))>
                        <p class="text-muted mb-8">{content.contact.intro.clone()}</p>
                        <div class="space-y-4 mb-8">
                            {content
                                .contact
                                .channels
                                .iter()
                                .map(|c| {
                                    view! {
                                        <div class="flex items-center gap-4 p-4 border border-green/20 hover:border-green/60 transition-colors">
                                            <span class="text-2xl" style:color=c.accent.hex()>
                                                {c.icon.glyph()}
                                            </span>
                                            <div>
                                                <p class="text-xs text-muted uppercase">{c.label.clone()}</p>
                                                <p class="text-sm">{c.value.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-4">
                            {content
                                .contact
                                .socials
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label.clone()
                                            class="p-3 border border-cyan/30 text-cyan hover:border-cyan hover:bg-cyan/10 transition-colors"
                                        >
                                            <i class=link.icon.devicon().unwrap_or_default() />
                                            {link.icon.devicon().is_none().then(|| link.icon.glyph())}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div style=reveal_css(visible, Reveal::right(400))>
                        <div class="border border-green/30 bg-black/60">
                            <div class="flex items-center gap-2 px-4 py-2 border-b border-green/30">
                                <span class="w-3 h-3 rounded-full bg-red" />
                                <span class="w-3 h-3 rounded-full bg-cyan" />
                                <span class="w-3 h-3 rounded-full bg-green" />
                                <span class="ml-2 text-xs text-muted">"secure_terminal.sh"</span>
                            </div>
                            <div class="p-4 h-40 overflow-y-auto text-xs text-green space-y-1">
                                {move || {
                                    transmission
                                        .with(|tx| tx.transcript().to_vec())
                                        .into_iter()
                                        .map(|line| {
                                            let class = if line.starts_with("> ERROR") {
                                                "text-red"
                                            } else {
                                                ""
                                            };
                                            view! { <p class=class>{line}</p> }
                                        })
                                        .collect_view()
                                }}
                                <span class="terminal-cursor" />
                            </div>
                            <Show
                                when=move || state.get() != FormState::Sent
                                fallback=|| {
                                    view! {
                                        <div class="p-6 text-center border-t border-green/30">
                                            <p class="text-green font-bold mb-2">"TRANSMISSION COMPLETE"</p>
                                            <p class="text-sm text-muted">
                                                "Message encrypted and sent successfully. Will respond within 24 hours."
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <form class="p-6 space-y-4 border-t border-green/30" on:submit=on_submit>
                                    <input
                                        node_ref=name_ref
                                        type="text"
                                        placeholder="> Enter your name"
                                        class=INPUT_CLASS
                                        prop:disabled=sending
                                    />
                                    <input
                                        node_ref=email_ref
                                        type="email"
                                        placeholder="> Enter your email"
                                        class=INPUT_CLASS
                                        prop:disabled=sending
                                    />
                                    <textarea
                                        node_ref=message_ref
                                        rows="5"
                                        placeholder="> Enter your message"
                                        class=INPUT_CLASS
                                        prop:disabled=sending
                                    />
                                    <button
                                        type="submit"
                                        class="cyber-button w-full py-3 disabled:opacity-50"
                                        prop:disabled=sending
                                    >
                                        {move || if sending() { "TRANSMITTING..." } else { "SEND_MESSAGE" }}
                                    </button>
                                </form>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
