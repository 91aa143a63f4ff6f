//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::DemoAction`]s. Applying
//! an action is the core's job; this crate only decides what a key means.
//!
//! | Key | Action |
//! |-----|--------|
//! | `w` / Up, `s` / Down | pan camera up / down |
//! | `a` / Left, `d` / Right | pan camera left / right |
//! | `q`, `e` | yaw orbit forward / backward |
//! | `z`, `x` | zoom in / out |
//! | `r` | reset camera offsets |
//! | `1`..`9` | switch scene (unknown scenes are ignored by the core) |
//! | `u` | toggle supersampling |
//! | Esc, Ctrl-C | quit |

pub mod map;

pub use tui_orrery_types as types;

pub use map::{handle_key_event, should_quit};
