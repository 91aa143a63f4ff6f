//! Animation core - scene construction, animation and camera placement
//!
//! This crate turns the engine's static scene graph into a running demo. It
//! has no terminal or input dependencies, making it:
//!
//! - **Deterministic**: the same seed builds the same layout, and transforms
//!   are closed-form functions of time (spin aside)
//! - **Testable**: every formula is unit-tested without a terminal
//! - **Portable**: the host decides how frames are timed and displayed
//!
//! # Module Structure
//!
//! - [`scenes`]: the three scene builders and the [`SceneDef`] catalog
//! - [`entity`]: animatable-entity descriptors (sun, body, moon, asteroid, shape)
//! - [`animate`]: one dispatch function per entity kind plus light sweeps
//! - [`camera_rig`]: automatic camera orbit with user offsets
//! - [`demo`]: [`Demo`], the frame driver that ties it all together
//!
//! # Time Model
//!
//! Orbit angles and bobbing are *set* from absolute time, so positions do not
//! depend on frame-rate history. Self-rotation is *accumulated* from the frame
//! delta. Re-deriving spin from time would change behaviour under a varying
//! frame rate, so the two paths are deliberately kept apart.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_orrery_core::Demo;
//! use tui_orrery_types::DemoAction;
//!
//! let mut demo = Demo::new(StdRng::seed_from_u64(7));
//! demo.frame(1.0 / 30.0);
//!
//! demo.apply(DemoAction::ZoomIn);
//! demo.apply(DemoAction::SwitchScene(1));
//! assert_eq!(demo.title(), "Geometric Garden");
//! assert!(demo.offset().is_zero());
//! ```

pub mod animate;
pub mod camera_rig;
pub mod demo;
pub mod entity;
pub mod scenes;

pub use tui_orrery_engine as engine;
pub use tui_orrery_types as types;

pub use animate::{animate, asteroid_position, bob, orbit_angle, shape_position, shape_scale};
pub use camera_rig::CameraOrbit;
pub use demo::Demo;
pub use entity::{AnimatedEntity, Asteroid, GardenShape, LightSweep, Moon, OrbitalBody, Sun};
pub use scenes::{catalog, SceneDef, SceneHandle, SceneKind};
