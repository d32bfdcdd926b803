//! Ambient background and decorative node graph.
//!
//! Everything here is a pure function of canvas size and animation time, so a
//! frame can be planned (and tested) without a canvas. The browser frontend
//! replays the planned [`DrawOp`]s onto a 2D context once per animation frame.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;

pub const NODE_COUNT: usize = 5;

/// Node base positions as (width, height) fractions of the canvas.
pub const NODE_LAYOUT: [(f64, f64); NODE_COUNT] = [
    (0.2, 0.3),
    (0.5, 0.4),
    (0.8, 0.3),
    (0.35, 0.7),
    (0.65, 0.7),
];

/// Angular speeds of the x (sine) and y (cosine) oscillation.
const X_OMEGA: f64 = 2.0;
const Y_OMEGA: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string. Opaque colors use hex notation; alpha is printed
    /// with [`css_alpha`].
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            return format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        }
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            css_alpha(self.a)
        )
    }
}

/// `a` clamped to [0, 1] as a short CSS number ("0", "0.03", "1").
pub fn css_alpha(a: f64) -> String {
    let milli = if a.is_finite() {
        (a.clamp(0.0, 1.0) * 1000.0).round() as u32
    } else {
        0
    };
    match milli {
        0 => "0".to_string(),
        1000 => "1".to_string(),
        m => {
            let digits = format!("{m:03}");
            format!("0.{}", digits.trim_end_matches('0'))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorativeNode {
    pub base_x: f64,
    pub base_y: f64,
}

impl DecorativeNode {
    /// Position of the `index`-th node at time `t`; `index` is its phase.
    pub fn position_at(&self, index: usize, t: f64, amplitude: f64) -> Point {
        let phase = index as f64;
        Point::new(
            self.base_x + (t * X_OMEGA + phase).sin() * amplitude,
            self.base_y + (t * Y_OMEGA + phase).cos() * amplitude,
        )
    }

    pub fn base(&self) -> Point {
        Point::new(self.base_x, self.base_y)
    }
}

pub fn base_nodes(size: CanvasSize) -> [DecorativeNode; NODE_COUNT] {
    NODE_LAYOUT.map(|(fx, fy)| DecorativeNode {
        base_x: size.width * fx,
        base_y: size.height * fy,
    })
}

pub fn node_positions(size: CanvasSize, t: f64, amplitude: f64) -> [Point; NODE_COUNT] {
    let nodes = base_nodes(size);
    let mut out = [Point::new(0.0, 0.0); NODE_COUNT];
    for (i, node) in nodes.iter().enumerate() {
        out[i] = node.position_at(i, t, amplitude);
    }
    out
}

/// Every unordered pair of node indices, in (i, j>i) order.
pub fn mesh_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..NODE_COUNT).flat_map(|i| ((i + 1)..NODE_COUNT).map(move |j| (i, j)))
}

/// Animation time, advanced by a fixed step per frame regardless of how much
/// wall time passed. Time is `frames * step`, so it is a pure function of the
/// number of frames drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    frames: u64,
    step: f64,
}

impl FrameClock {
    pub fn new(step: f64) -> Self {
        Self { frames: 0, step }
    }

    pub fn time(&self) -> f64 {
        self.frames as f64 * self.step
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time to draw the current frame with; advances to the next frame.
    pub fn tick(&mut self) -> f64 {
        let t = self.time();
        self.frames += 1;
        t
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    /// Fill the whole surface with a two-stop radial gradient.
    RadialGradient {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        inner: Rgba,
        outer: Rgba,
        width: f64,
        height: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Disc {
        center: Point,
        radius: f64,
        color: Rgba,
    },
}

/// Plans frames for a fixed canvas size, reusing one op buffer.
#[derive(Debug, Clone)]
pub struct FramePlanner {
    size: CanvasSize,
    cfg: AnimationConfig,
    ops: Vec<DrawOp>,
}

impl FramePlanner {
    pub fn new(size: CanvasSize, cfg: AnimationConfig) -> Self {
        Self {
            size,
            cfg,
            ops: Vec::with_capacity(2 + 10 + NODE_COUNT * 2),
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn plan(&mut self, t: f64) -> &[DrawOp] {
        let size = self.size;
        let cfg = &self.cfg;
        self.ops.clear();

        self.ops.push(DrawOp::Clear {
            width: size.width,
            height: size.height,
        });
        self.ops.push(DrawOp::RadialGradient {
            center: size.center(),
            inner_radius: 0.0,
            outer_radius: size.width / 2.0,
            inner: cfg.gradient_inner,
            outer: cfg.gradient_outer,
            width: size.width,
            height: size.height,
        });

        // Links join the resting positions; only the discs oscillate.
        let nodes = base_nodes(size);
        for (i, j) in mesh_pairs() {
            self.ops.push(DrawOp::Line {
                from: nodes[i].base(),
                to: nodes[j].base(),
                color: cfg.link_color,
                width: cfg.link_width,
            });
        }

        for (i, node) in nodes.iter().enumerate() {
            let center = node.position_at(i, t, cfg.amplitude);
            self.ops.push(DrawOp::Disc {
                center,
                radius: cfg.node_radius,
                color: cfg.node_color,
            });
            self.ops.push(DrawOp::Disc {
                center,
                radius: cfg.glow_radius,
                color: cfg.glow_color,
            });
        }

        &self.ops
    }
}
