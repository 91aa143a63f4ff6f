//! tui-orrery (workspace facade crate).
//!
//! Exposes `tui_orrery::{core,engine,input,term,types}` so the binary, the
//! integration tests and the benches share one import path while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_orrery_core as core;
pub use tui_orrery_engine as engine;
pub use tui_orrery_input as input;
pub use tui_orrery_term as term;
pub use tui_orrery_types as types;
