use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use blueprint_ui::animation::{CanvasSize, DrawOp, FrameClock, FramePlanner};
use blueprint_ui::config::ConsoleConfig;
use blueprint_ui::error::StartupError;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Size the canvas to its container's width and the configured height, and
/// hand back its 2d context. Sizing happens once; the canvas is not resized
/// with the window.
pub(super) fn prepare(
    canvas: &HtmlCanvasElement,
    height: u32,
) -> Result<CanvasRenderingContext2d, StartupError> {
    let width = canvas
        .parent_element()
        .map(|p| p.get_bounding_client_rect().width())
        .unwrap_or_else(|| f64::from(canvas.client_width()));
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height);

    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(StartupError::NoCanvasContext)
}

pub(super) fn planner_for(canvas: &HtmlCanvasElement, config: &ConsoleConfig) -> FramePlanner {
    let size = CanvasSize::new(f64::from(canvas.width()), f64::from(canvas.height()));
    FramePlanner::new(size, config.animation.clone())
}

/// Draw one frame at every animation frame, forever.
pub(super) fn start_animation(ctx: CanvasRenderingContext2d, mut planner: FramePlanner, step: f64) {
    let mut clock = FrameClock::new(step);

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        paint(&ctx, planner.plan(clock.tick()));
        if let Some(cb) = f.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_frame(cb);
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        warn!(error = ?e, "requestAnimationFrame failed; animation stopped");
    }
}

#[allow(deprecated)]
fn paint(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawOp::RadialGradient {
                center,
                inner_radius,
                outer_radius,
                inner,
                outer,
                width,
                height,
            } => {
                let gradient = match ctx.create_radial_gradient(
                    center.x,
                    center.y,
                    *inner_radius,
                    center.x,
                    center.y,
                    *outer_radius,
                ) {
                    Ok(g) => g,
                    Err(_) => continue,
                };
                let _ = gradient.add_color_stop(0.0, &inner.css());
                let _ = gradient.add_color_stop(1.0, &outer.css());
                ctx.set_fill_style(gradient.as_ref());
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                ctx.begin_path();
                ctx.set_stroke_style(&JsValue::from_str(&color.css()));
                ctx.set_line_width(*width);
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawOp::Disc {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                if ctx.arc(center.x, center.y, *radius, 0.0, TAU).is_ok() {
                    ctx.set_fill_style(&JsValue::from_str(&color.css()));
                    ctx.fill();
                }
            }
        }
    }
}
