//! Coordinate framing and SVG primitives.

use crate::models::Position;

/// Maps instance coordinates onto a pixel canvas with the y axis pointing up.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frame {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    /// Fits the bounding box of `points`, padded by 10% on each side, into a
    /// `width`×`height` canvas leaving `margin` pixels for axis labels.
    pub fn fit<'a>(
        points: impl IntoIterator<Item = &'a Position>,
        width: f64,
        height: f64,
        margin: f64,
    ) -> Self {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for p in points {
            let (x, y) = (p.x as f64, p.y as f64);
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        let (min_x, max_x, min_y, max_y) = bounds.unwrap_or((0.0, 1.0, 0.0, 1.0));
        let pad_x = ((max_x - min_x) * 0.1).max(1.0);
        let pad_y = ((max_y - min_y) * 0.1).max(1.0);

        Self {
            min_x: min_x - pad_x,
            max_x: max_x + pad_x,
            min_y: min_y - pad_y,
            max_y: max_y + pad_y,
            left: margin,
            right: width - margin,
            top: margin,
            bottom: height - margin,
        }
    }

    pub fn map(&self, p: &Position) -> (f64, f64) {
        (self.map_x(p.x as f64), self.map_y(p.y as f64))
    }

    pub fn map_x(&self, x: f64) -> f64 {
        self.left + (x - self.min_x) / (self.max_x - self.min_x) * (self.right - self.left)
    }

    pub fn map_y(&self, y: f64) -> f64 {
        self.bottom - (y - self.min_y) / (self.max_y - self.min_y) * (self.bottom - self.top)
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        ticks(self.min_x, self.max_x)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        ticks(self.min_y, self.max_y)
    }

    /// Plot area as `(left, top, right, bottom)` in pixels.
    pub fn area(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.right, self.bottom)
    }
}

/// Round tick step (1, 2 or 5 times a power of ten) giving about 8 ticks.
fn nice_step(span: f64) -> f64 {
    let raw = span / 8.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper bound on ticks per axis.
const MAX_TICKS: usize = 32;

fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = nice_step(max - min);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let start = (min / step).ceil() * step;
    let span = (max + step * 1e-9 - start) / step;
    if !span.is_finite() || span < 0.0 {
        return Vec::new();
    }
    let count = (span.floor() as usize + 1).min(MAX_TICKS);

    let mut out: Vec<f64> = (0..count).map(|k| start + k as f64 * step).collect();
    // steps below the float resolution of the axis collapse onto one value
    out.dedup();
    out
}

/// Minimal SVG document builder.
#[derive(Debug)]
pub(crate) struct Svg {
    body: String,
    width: f64,
    height: f64,
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            body: String::new(),
            width,
            height,
        }
    }

    pub fn raw(&mut self, fragment: &str) {
        self.body.push_str(fragment);
        self.body.push('\n');
    }

    pub fn line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), attrs: &str) {
        self.raw(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" {}/>"#,
            x1, y1, x2, y2, attrs
        ));
    }

    pub fn circle(&mut self, (cx, cy): (f64, f64), r: f64, attrs: &str) {
        self.raw(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" {}/>"#,
            cx, cy, r, attrs
        ));
    }

    pub fn rect(&mut self, (x, y): (f64, f64), w: f64, h: f64, attrs: &str) {
        self.raw(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" {}/>"#,
            x, y, w, h, attrs
        ));
    }

    pub fn text(&mut self, (x, y): (f64, f64), content: &str, attrs: &str) {
        self.raw(&format!(
            r#"<text x="{:.1}" y="{:.1}" {}>{}</text>"#,
            x,
            y,
            attrs,
            escape(content)
        ));
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Formats a tick value without a trailing `.0`.
pub(crate) fn tick_label(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}
