mod about;
mod boot;
mod certifications;
mod contact;
mod education;
mod effects;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Accent, ContentError, Portfolio};
use crate::fx::Reveal;
use effects::reveal_css;
use about::About;
use boot::{use_boot_sequence, BootOverlay};
use certifications::Certifications;
use contact::Contact;
use education::Education;
use footer::Footer;
use hero::Hero;
use nav::Navigation;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/cyber-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-mono bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Security Analyst Portfolio") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match portfolio() {
        Ok(content) => view! { <BootGate content /> }.into_any(),
        Err(e) => view! { <ContentUnavailable error=e /> }.into_any(),
    }
}

/// Shows the boot overlay until the sequence completes, then swaps in the
/// page for the rest of the load.
#[component]
fn BootGate(content: &'static Portfolio) -> impl IntoView {
    provide_context(content);
    let boot = use_boot_sequence(content.boot.clone(), content.timings);
    let booted = Memo::new(move |_| boot.with(|b| b.is_complete()));

    view! {
        <Title text="Home" />
        <Show when=move || booted.get() fallback=move || view! { <BootOverlay boot /> }>
            <Page />
        </Show>
    }
}

#[component]
fn Page() -> impl IntoView {
    view! {
        <div class="min-h-screen overflow-x-hidden">
            <div class="fixed inset-0 pointer-events-none z-0">
                <div class="absolute inset-0 opacity-20 grid-bg" />
                <div class="absolute inset-0 scan-lines" />
            </div>
            <Navigation />
            <main class="relative z-10">
                <Hero />
                <About />
                <Education />
                <Skills />
                <Projects />
                <Certifications />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

/// Kicker line plus gradient title shared by every content section.
#[component]
fn SectionHeader(
    visible: Signal<bool>,
    kicker: &'static str,
    title: &'static str,
    #[prop(optional)] accent: Accent,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-16" style=reveal_css(visible, Reveal::up(0))>
            <div class="flex items-center gap-4 mb-4">
                <div class="w-12 h-[2px]" style:background-color=accent.hex() />
                <span class="text-sm uppercase tracking-widest" style:color=accent.hex()>
                    {kicker}
                </span>
            </div>
            <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4">
                <span class="text-gradient">{title}</span>
            </h2>
            {blurb.map(|b| view! { <p class="text-muted max-w-2xl">{b}</p> })}
        </div>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    log::error!("{error}");
    view! {
        <Title text="Offline" />
        <div class="flex min-h-screen items-center justify-center">
            <pre class="text-red">{format!("> FATAL: {error}")}</pre>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="404" />
        <div class="flex min-h-screen flex-col items-center justify-center gap-4">
            <pre class="text-red">"> ERROR 404: route not found"</pre>
            <a href="/" class="text-green hover:underline">
                "[ RETURN_TO_BASE ]"
            </a>
        </div>
    }
}
