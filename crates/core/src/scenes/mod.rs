//! Scene builders and the scene catalog.
//!
//! A builder returns a [`SceneHandle`]: the populated scene graph plus the
//! ordered list of entities the animator drives. Builders take the random
//! source as a parameter; pass a seeded `StdRng` for reproducible layouts.

pub mod asteroids;
pub mod garden;
pub mod solar;

use glam::Vec3;
use rand::{Rng, RngCore};

use crate::camera_rig::CameraOrbit;
use crate::engine::{Scene, Star};
use crate::entity::{AnimatedEntity, LightSweep};

/// A built scene and everything that moves in it.
#[derive(Debug, Clone)]
pub struct SceneHandle {
    pub scene: Scene,
    pub entities: Vec<AnimatedEntity>,
    pub sweeps: Vec<LightSweep>,
}

impl SceneHandle {
    pub fn new(scene: Scene, entities: Vec<AnimatedEntity>, sweeps: Vec<LightSweep>) -> Self {
        Self {
            scene,
            entities,
            sweeps,
        }
    }
}

/// The three selectable scenes, in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    SolarSystem,
    GeometricGarden,
    AsteroidField,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [
        SceneKind::SolarSystem,
        SceneKind::GeometricGarden,
        SceneKind::AsteroidField,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::SolarSystem => "Solar System",
            SceneKind::GeometricGarden => "Geometric Garden",
            SceneKind::AsteroidField => "Asteroid Field",
        }
    }
}

/// Catalog entry: how to build a scene and how the camera circles it.
#[derive(Debug, Clone, Copy)]
pub struct SceneDef {
    pub kind: SceneKind,
    pub orbit: CameraOrbit,
    build: fn(&mut dyn RngCore) -> SceneHandle,
}

impl SceneDef {
    pub fn of(kind: SceneKind) -> Self {
        match kind {
            SceneKind::SolarSystem => Self {
                kind,
                orbit: CameraOrbit::new(30.0, 12.0, 0.05),
                build: solar::build,
            },
            SceneKind::GeometricGarden => Self {
                kind,
                orbit: CameraOrbit::new(16.0, 7.0, 0.12),
                build: garden::build,
            },
            SceneKind::AsteroidField => Self {
                kind,
                orbit: CameraOrbit::new(28.0, 9.0, 0.04),
                build: asteroids::build,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn build(&self, rng: &mut dyn RngCore) -> SceneHandle {
        let handle = (self.build)(rng);
        let triangles: usize = handle
            .scene
            .nodes()
            .iter()
            .filter_map(|n| n.mesh())
            .map(|m| handle.scene.mesh(m).triangle_count())
            .sum();
        log::debug!(
            "built '{}': {} nodes, {} triangles, {} animated, {} lights, {} stars",
            self.title(),
            handle.scene.node_count(),
            triangles,
            handle.entities.len(),
            handle.scene.lights().len(),
            handle.scene.stars().len()
        );
        handle
    }
}

/// All scenes in key order (`1`, `2`, `3`).
pub fn catalog() -> [SceneDef; 3] {
    SceneKind::ALL.map(SceneDef::of)
}

/// Scatter `count` stars uniformly over a spherical shell.
///
/// Direction is uniform on the sphere (polar angle via `acos(2u - 1)`), the
/// radius uniform in `[inner, outer)`.
pub fn scatter_stars<R: Rng + ?Sized>(
    scene: &mut Scene,
    rng: &mut R,
    count: usize,
    inner: f32,
    outer: f32,
) {
    for _ in 0..count {
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        let cos_phi: f32 = rng.random_range(-1.0..=1.0);
        let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
        let radius = rng.random_range(inner..outer);
        scene.add_star(Star {
            position: Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin()) * radius,
            brightness: rng.random_range(0.35..1.0),
        });
    }
}

/// HSV (all in `[0, 1]`) to linear RGB.
pub(crate) fn hsv(h: f32, s: f32, v: f32) -> Vec3 {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let c = v * s;
    let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
    let (r, g, b) = match h6 as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Vec3::new(r, g, b) + Vec3::splat(v - c)
}
