//! DemoView: composes a rendered image and text overlays into a framebuffer.
//!
//! This module is pure (no I/O) and unit-tested without a terminal.

use crate::engine::Image;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Upper half block: foreground is the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel size of the image that fills this viewport.
    pub fn image_size(self) -> (u16, u16) {
        (self.width, self.height.saturating_mul(2))
    }
}

/// A line of text drawn over the image. Higher `z` draws later.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub fg: Rgb,
    pub bold: bool,
    pub z: i32,
}

impl Overlay {
    pub fn new(x: u16, y: u16, text: impl Into<String>, fg: Rgb) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            fg,
            bold: false,
            z: 0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Width in cells; every char takes one cell.
    pub fn width(&self) -> u16 {
        u16::try_from(self.text.chars().count()).unwrap_or(u16::MAX)
    }
}

/// What the heads-up overlays report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud<'a> {
    pub title: &'a str,
    pub scene_index: usize,
    pub scene_count: usize,
    pub fps: Option<f32>,
    pub supersampling: bool,
}

const TITLE_FG: Rgb = Rgb::new(255, 214, 102);
const STATUS_FG: Rgb = Rgb::new(150, 220, 150);
const HINT_FG: Rgb = Rgb::new(170, 170, 190);

const HINTS: &str = "wasd/arrows pan  q/e yaw  z/x zoom  r reset  1-9 scene  u aa  esc quit";

#[derive(Debug, Clone)]
pub struct DemoView {
    pub show_hints: bool,
}

impl Default for DemoView {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

impl DemoView {
    pub fn new(show_hints: bool) -> Self {
        Self { show_hints }
    }

    /// Render `image` plus the HUD into `fb`, resizing it to `viewport`.
    pub fn render_into(
        &self,
        image: &Image,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        blit_image(image, fb);

        let mut overlays = self.overlays(hud, viewport);
        draw_overlays(fb, &mut overlays);
    }

    /// Title, status line and (optionally) control hints for `hud`.
    pub fn overlays(&self, hud: &Hud<'_>, viewport: Viewport) -> Vec<Overlay> {
        let mut overlays = Vec::with_capacity(3);

        let title = format!(" {} [{}/{}]", hud.title, hud.scene_index + 1, hud.scene_count);
        overlays.push(Overlay::new(0, 0, title, TITLE_FG).bold().with_z(2));

        let fps = match hud.fps {
            Some(fps) => format!("{fps:.0} fps"),
            None => "-- fps".to_string(),
        };
        let aa = if hud.supersampling { "on" } else { "off" };
        let status = Overlay::new(0, 0, format!("{fps}  aa {aa} "), STATUS_FG).with_z(1);
        let x = viewport.width.saturating_sub(status.width());
        overlays.push(Overlay { x, ..status });

        if self.show_hints && viewport.height > 1 {
            let y = viewport.height - 1;
            overlays.push(Overlay::new(1, y, HINTS, HINT_FG));
        }
        overlays
    }
}

/// Pack two image rows into each cell row with [`HALF_BLOCK`].
///
/// Pixels outside the image are black.
pub fn blit_image(image: &Image, fb: &mut FrameBuffer) {
    let pixel = |x: u16, y: u16| image.rgb8(x, y).map_or(Rgb::BLACK, Rgb::from_array);
    for row in 0..fb.height() {
        let top_y = row.saturating_mul(2);
        for x in 0..fb.width() {
            let style = CellStyle {
                fg: pixel(x, top_y),
                bg: pixel(x, top_y.saturating_add(1)),
                bold: false,
            };
            fb.put_char(x, row, HALF_BLOCK, style);
        }
    }
}

/// Draw overlays in ascending `z`; equal `z` keeps insertion order.
pub fn draw_overlays(fb: &mut FrameBuffer, overlays: &mut [Overlay]) {
    overlays.sort_by_key(|o| o.z);
    for o in overlays.iter() {
        fb.put_text(o.x, o.y, &o.text, o.fg, o.bold);
    }
}
