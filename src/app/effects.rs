use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn_with_options, use_raf_fn,
    use_timeout_fn, use_window_size, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn, UseIntervalFnOptions, UseTimeoutFnReturn,
    UseWindowSizeReturn,
};
use rand::{rngs::SmallRng, SeedableRng};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::fx::{
    Decrypter, MountGate, RainField, Reveal, Surface, Tick, Ticker, TimerCmd, Typewriter,
    VisibilityLatch,
};

#[derive(Error, Debug, Clone)]
pub enum CanvasError {
    #[error("2d context unavailable")]
    NoContext,
    #[error("canvas error: {0}")]
    Js(String),
}

/// Flip to `true` the first time `target` crosses `threshold`, then stop
/// observing. Never flips back. A section that never mounts never reveals.
pub fn use_reveal_latch(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let latch = StoredValue::new(VisibilityLatch::new());
    let (visible, set_visible) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let flipped = entries.iter().any(|entry| {
                latch
                    .try_update_value(|l| l.observe(entry.is_intersecting()))
                    .unwrap_or(false)
            });
            if flipped {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if *visible {
                if let Some(el) = target.get_untracked() {
                    log::debug!("section revealed: #{}", el.id());
                }
                latch.update_value(VisibilityLatch::detach);
                stop();
            }
        },
        false,
    );

    on_cleanup(move || {
        latch.try_update_value(VisibilityLatch::detach);
    });

    visible.into()
}

/// Per-element visibility for content that may mount inside an already
/// revealed section. Stays hidden until two animation frames after mount, so
/// the browser has committed the hidden style before the transition starts.
pub fn use_mount_gate(section_visible: Signal<bool>) -> Signal<bool> {
    let gate = RwSignal::new(MountGate::new());

    Effect::new(move |_| {
        request_animation_frame(move || {
            request_animation_frame(move || {
                gate.try_update(MountGate::paint);
            })
        })
    });

    Signal::derive(move || gate.with(|g| g.shown(section_visible.get())))
}

/// Inline style for one staggered element of a section.
pub fn reveal_css(visible: Signal<bool>, reveal: Reveal) -> impl Fn() -> String + Copy {
    move || reveal.style(visible.get()).to_css()
}

/// Drive `on_tick` every `period_ms` once `start` turns true (after an
/// optional `delay_ms`), until it reports [`Tick::Done`]. The interval and the
/// delay are both cancelled when the owner unmounts.
pub fn use_ticker<F>(period_ms: u64, delay_ms: u64, start: Signal<bool>, on_tick: F)
where
    F: Fn() -> Tick + Clone + Send + Sync + 'static,
{
    let ticker = StoredValue::new(Ticker::new(period_ms, delay_ms));
    let (finished, set_finished) = signal(false);

    let pausable = use_interval_fn_with_options(
        move || {
            let tick = on_tick();
            if ticker.try_update_value(|t| t.ticked(tick)) == Some(TimerCmd::Pause) {
                set_finished.set(true);
            }
        },
        ticker.with_value(Ticker::period_ms),
        UseIntervalFnOptions::default().immediate(false),
    );
    let resume = pausable.resume;
    let pause = pausable.pause;

    let UseTimeoutFnReturn { start: arm, .. } = use_timeout_fn(
        {
            let resume = resume.clone();
            move |_: ()| {
                if ticker.try_update_value(Ticker::delay_elapsed) == Some(TimerCmd::Resume) {
                    resume();
                }
            }
        },
        delay_ms as f64,
    );

    Effect::watch(
        move || start.get(),
        move |started, _, _| {
            if !*started {
                return;
            }
            match ticker.try_update_value(Ticker::start) {
                Some(TimerCmd::Resume) => resume(),
                Some(TimerCmd::Arm(_)) => arm(()),
                _ => {}
            }
        },
        true,
    );

    Effect::watch(
        move || finished.get(),
        move |done, _, _| {
            if *done {
                pause();
            }
        },
        false,
    );
}

/// Reveal-mode typewriter bound to a start signal.
pub fn use_typewriter(
    text: String,
    period_ms: u64,
    delay_ms: u64,
    start: Signal<bool>,
) -> Signal<String> {
    let engine = StoredValue::new(Typewriter::new(text));
    let (shown, set_shown) = signal(String::new());

    use_ticker(period_ms, delay_ms, start, move || {
        engine
            .try_update_value(|tw| {
                let tick = tw.tick();
                set_shown.set(tw.text().to_string());
                tick
            })
            .unwrap_or(Tick::Done)
    });

    shown.into()
}

/// Scramble-resolve text bound to a start signal.
pub fn use_decrypt(text: &str, period_ms: u64, stride: usize, start: Signal<bool>) -> Signal<String> {
    let engine = StoredValue::new(Decrypter::new(text, stride));
    let rng = StoredValue::new(SmallRng::from_entropy());
    let (shown, set_shown) = signal(String::new());

    use_ticker(period_ms, 0, start, move || {
        rng.try_update_value(|rng| {
            engine.try_update_value(|dec| {
                let tick = dec.tick(rng);
                set_shown.set(dec.text().to_string());
                if tick == Tick::Done {
                    log::debug!("decrypt resolved after {} iterations", dec.iteration());
                }
                tick
            })
        })
        .flatten()
        .unwrap_or(Tick::Done)
    });

    shown.into()
}

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement, cell_px: u32) -> Result<Self, CanvasError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CanvasError::Js(format!("{e:?}")))?
            .ok_or(CanvasError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NoContext)?;
        Ok(Self {
            ctx,
            font: format!("{cell_px}px 'Share Tech Mono', monospace"),
        })
    }
}

impl Surface for CanvasSurface {
    fn fade(&mut self, width: f64, height: f64) {
        self.ctx.set_fill_style_str("rgba(5, 5, 5, 0.05)");
        self.ctx.fill_rect(0.0, 0.0, width, height);
        self.ctx.set_fill_style_str("#00ff41");
        self.ctx.set_font(&self.font);
    }

    fn glyph(&mut self, glyph: char, x: f64, y: f64, alpha: f64) {
        let mut buf = [0u8; 4];
        self.ctx.set_global_alpha(alpha);
        // a failed glyph just leaves a gap in the column
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
        self.ctx.set_global_alpha(1.0);
    }
}

/// Full-viewport falling-glyph canvas. Runs from mount to unmount, unaffected
/// by section visibility.
#[component]
pub fn MatrixRain(cell_px: u32) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(RainField::new(0, 0, cell_px));
    let rng = StoredValue::new(SmallRng::from_entropy());
    let surface = StoredValue::new_local(None::<CanvasSurface>);
    let UseWindowSizeReturn { width, height } = use_window_size();

    Effect::new(move |_| {
        let (w, h) = (width.get() as u32, height.get() as u32);
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        canvas.set_width(w);
        canvas.set_height(h);
        field.update_value(|f| f.resize(w, h));

        if surface.with_value(Option::is_none) {
            match CanvasSurface::new(&canvas, cell_px) {
                Ok(s) => surface.set_value(Some(s)),
                Err(e) => log::warn!("matrix rain disabled: {e}"),
            }
        }
    });

    let _ = use_raf_fn(move |_| {
        surface.update_value(|s| {
            let Some(s) = s.as_mut() else {
                return;
            };
            field.update_value(|f| {
                rng.update_value(|r| {
                    f.frame(s, r);
                });
            });
        });
    });

    view! { <canvas node_ref=canvas_ref class="absolute inset-0 z-0" style="opacity: 0.4" /> }
}
