//! Minimal 3D engine for terminal output.
//!
//! The engine knows nothing about animation or input. It takes a [`Scene`]
//! (a flat arena of transform nodes, meshes, lights and stars) plus a
//! [`Camera`] and rasterizes them into an [`Image`] of linear RGB pixels that
//! a terminal front end can map onto character cells.
//!
//! # Module Structure
//!
//! - [`mesh`]: indexed triangle meshes and the procedural shape palette
//! - [`scene`]: node hierarchy, transforms, materials, stars
//! - [`light`]: ambient, directional and point lights (Lambert model)
//! - [`camera`]: perspective look-at camera
//! - [`raster`]: z-buffered software rasterizer with optional supersampling
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use tui_orrery_engine::{Camera, Light, Material, Mesh, Rasterizer, Scene, Transform};
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_mesh(Mesh::uv_sphere(1.0, 16, 12));
//! scene.add_object(None, ball, Material::lit(Vec3::ONE), Transform::IDENTITY);
//! scene.add_light(Light::ambient(Vec3::ONE, 0.5));
//!
//! let mut camera = Camera::default();
//! camera.set_viewport(32, 32);
//!
//! let mut rasterizer = Rasterizer::new(32, 32);
//! let image = rasterizer.render(&scene, &camera);
//! assert!(image.get(16, 16).unwrap().x > 0.0);
//! ```

pub mod camera;
pub mod light;
pub mod mesh;
pub mod raster;
pub mod scene;

pub use tui_orrery_types as types;

pub use camera::Camera;
pub use light::{Light, LightId};
pub use mesh::Mesh;
pub use raster::{to_srgb8, Image, RenderStats, Rasterizer};
pub use scene::{Material, MeshId, Node, NodeId, Scene, Star, Transform};
