use leptos::prelude::*;

use super::effects::use_ticker;
use crate::content::{Icon, Timings};
use crate::fx::{BootSequence, Checkpoint, Tick};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

const INDICATORS: [Icon; 3] = [Icon::Terminal, Icon::Shield, Icon::Lock];

/// Run the boot checkpoints on the boot timer and raise the completion flag
/// once, `boot_settle_ms` after the last checkpoint shows.
pub fn use_boot_sequence(checkpoints: Vec<Checkpoint>, timings: Timings) -> RwSignal<BootSequence> {
    let boot = RwSignal::new(BootSequence::new(checkpoints));

    let UseTimeoutFnReturn { start: settle, .. } = use_timeout_fn(
        move |_: ()| {
            if boot.try_update(|b| b.complete()).unwrap_or(false) {
                log::info!("boot complete");
            }
        },
        timings.boot_settle_ms as f64,
    );

    use_ticker(timings.boot_tick_ms, 0, Signal::stored(true), move || {
        let tick = boot.try_update(|b| b.tick()).unwrap_or(Tick::Done);
        if tick == Tick::Done {
            settle(());
        }
        tick
    });

    boot
}

#[component]
pub fn BootOverlay(boot: RwSignal<BootSequence>) -> impl IntoView {
    let progress = move || boot.with(|b| b.progress());

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-background">
            <div class="w-full max-w-md px-8">
                <div class="text-center mb-8">
                    <div class="relative inline-block mb-6 text-6xl text-green animate-pulse">
                        {Icon::Shield.glyph()}
                    </div>
                    <h2 class="text-2xl text-green mb-2">"SYSTEM_BOOT"</h2>
                    <p class="text-sm text-muted">{move || boot.with(|b| b.label().to_string())}</p>
                </div>
                <div class="relative h-2 bg-black overflow-hidden">
                    <div
                        class="absolute inset-y-0 left-0 bg-gradient-to-r from-green to-cyan transition-all duration-300"
                        style:width=move || format!("{}%", progress())
                    />
                </div>
                <div class="flex justify-between mt-2 text-xs text-muted">
                    <span>"Loading..."</span>
                    <span class="text-green">{move || format!("{}%", progress())}</span>
                </div>
                <div class="mt-8 grid grid-cols-3 gap-2">
                    {INDICATORS
                        .iter()
                        .enumerate()
                        .map(|(i, icon)| {
                            view! {
                                <div
                                    class="flex items-center justify-center p-3 border border-green/20 text-green transition-opacity duration-300"
                                    style:opacity=move || {
                                        if boot.with(|b| b.indicator_lit(i)) { "1" } else { "0.3" }
                                    }
                                >
                                    {icon.glyph()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
