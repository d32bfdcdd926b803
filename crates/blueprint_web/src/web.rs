use blueprint_ui::config::ConsoleConfig;
use blueprint_ui::error::StartupError;
use leptos::prelude::*;
use tracing::{error, info, warn};

use crate::ui_model::{config_from_inline, opacity_style, CONFIG_ELEMENT_ID};

mod canvas;
mod host;
mod logging;
mod socket;
mod state;

use state::ConsoleHandle;

pub fn start() {
    logging::init();
    if let Err(e) = check_document() {
        report_startup_failure(&e);
        return;
    }
    let config = load_config();
    info!(endpoint = %config.endpoint, "starting console");
    mount_to_body(move || view! { <App config=config.clone() /> });
}

fn check_document() -> Result<(), StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    window.document().ok_or(StartupError::NoDocument)?;
    Ok(())
}

fn load_config() -> ConsoleConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let (config, problem) = config_from_inline(raw.as_deref());
    if let Some(problem) = problem {
        warn!(error = %problem, "ignoring inline config; using defaults");
    }
    config
}

#[component]
fn App(config: ConsoleConfig) -> impl IntoView {
    let console = ConsoleHandle::new(config);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let started = StoredValue::new(false);

    // Everything starts once the canvas is in the DOM; without a 2d context
    // nothing starts at all.
    Effect::new(move |_| {
        let Some(el) = canvas_ref.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let config = console.config();
        let ctx = match canvas::prepare(&el, config.canvas_height) {
            Ok(ctx) => ctx,
            Err(e) => {
                report_startup_failure(&e);
                return;
            }
        };

        console.apply(|c, host| c.start(host));
        canvas::start_animation(ctx, canvas::planner_for(&el, &config), config.animation.time_step);
        socket::connect(&config.endpoint, console);
    });

    let status = console.status;
    let thought = console.thought;
    let results = console.results;

    view! {
        <div class="console">
            <header class="status-bar">
                <span id="voice-status" class="voice-status">
                    {move || status.with(|s| s.voice_label())}
                </span>
                <span
                    id="system-status"
                    class=move || status.with(|s| s.system().css_class())
                    attr:data-connection=move || status.with(|s| s.connection().as_str())
                >
                    {move || status.with(|s| s.system().label())}
                </span>
                <span id="clock" class="clock">
                    {move || console.clock.get()}
                </span>
            </header>

            <div class="canvas-container">
                <canvas id="node-canvas" node_ref=canvas_ref></canvas>
            </div>

            <div
                id="thought-bubble"
                class="thought-bubble"
                class:hidden=move || thought.with(|t| !t.visible())
            >
                <span
                    id="thought-text"
                    class="thought-text"
                    style:opacity=move || thought.with(|t| opacity_style(t.opacity()))
                >
                    {move || thought.with(|t| t.text().to_string())}
                </span>
            </div>

            <div
                id="results"
                class="results-grid"
                class:hidden=move || results.with(|r| !r.visible())
            >
                {move || {
                    results
                        .with(|r| r.items().to_vec())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="result-card">
                                    <div class="result-title">{item.title}</div>
                                    <div class="result-subtitle">{item.subtitle}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div id="history" class="history">
                <For
                    each=move || console.history.get()
                    key=|entry| entry.seq
                    children=move |entry| {
                        let response = entry.response_text().to_string();
                        view! {
                            <div class="history-item">
                                <span class="history-time">{entry.timestamp}</span>
                                <span class="history-command">{entry.command}</span>
                                <span class="history-response">{response}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

fn report_startup_failure(e: &StartupError) {
    error!(error = %e, "console failed to start");
}
