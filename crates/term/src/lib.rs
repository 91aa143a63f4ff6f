//! Terminal presentation layer.
//!
//! Renders into a plain framebuffer of styled cells instead of using a widget
//! toolkit, then flushes only what changed to the terminal backend.
//!
//! - [`fb`]: cells, colors and the framebuffer
//! - [`view`]: packs a rendered [`engine::Image`] into half-block cells and
//!   layers text overlays on top
//! - [`renderer`]: raw mode, alternate screen and diffed output
//! - [`fps`]: windowed frame-rate estimate for the status line

pub mod fb;
pub mod fps;
pub mod renderer;
pub mod view;

pub use tui_orrery_engine as engine;
pub use tui_orrery_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use fps::FpsCounter;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{blit_image, draw_overlays, DemoView, Hud, Overlay, Viewport, HALF_BLOCK};
