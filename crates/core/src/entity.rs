//! Animatable-entity descriptors.
//!
//! Each descriptor names the scene node (or light) it drives and carries the
//! immutable parameters fixed when the scene was built. The animator reads
//! these and writes transforms back into the scene.

use glam::{Vec2, Vec3};

use crate::engine::{LightId, NodeId};

/// A planet on a circular orbit around the scene origin.
///
/// `pivot` is the parent group holding the orbital-plane tilt; `node` is the
/// planet itself, positioned inside the pivot's tilted frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalBody {
    pub node: NodeId,
    pub pivot: NodeId,
    pub orbit_radius: f32,
    /// Radians per second.
    pub orbit_speed: f32,
    /// Radians per second about the local Y axis.
    pub spin_speed: f32,
    /// Tilt of the orbital plane about X, in radians.
    pub tilt: f32,
    pub vertical_offset: f32,
}

/// A satellite parented to a planet node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub node: NodeId,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
}

/// A tumbling rock drifting around the field's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub node: NodeId,
    /// Spin rates about X and Y (radians per second).
    pub spin: Vec2,
    /// Orbit angle at `t = 0`.
    pub drift_angle: f32,
    pub drift_radius: f32,
    pub drift_speed: f32,
    pub base_height: f32,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,
}

/// One object of the geometric garden.
///
/// Phase and speed are derived from `index` so neighbours never move in step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GardenShape {
    pub node: NodeId,
    pub index: usize,
    /// Resting position on the spiral.
    pub base: Vec3,
}

impl GardenShape {
    pub const BOB_AMPLITUDE: f32 = 0.35;
    pub const PULSE_AMPLITUDE: f32 = 0.08;

    pub fn phase(&self) -> f32 {
        self.index as f32 * 0.7
    }

    pub fn speed(&self) -> f32 {
        0.4 + (self.index % 5) as f32 * 0.15
    }
}

/// The solar system's star: pulses in size and spins slowly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub node: NodeId,
    pub spin_speed: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
}

/// Binds a point light to an independent sinusoid on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSweep {
    pub light: LightId,
    pub center: Vec3,
    pub amplitude: Vec3,
    pub frequency: Vec3,
    pub phase: Vec3,
}

/// Tagged union of everything the animator moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedEntity {
    Sun(Sun),
    Body(OrbitalBody),
    Moon(Moon),
    Asteroid(Asteroid),
    Shape(GardenShape),
}

impl AnimatedEntity {
    /// The scene node this entity writes to.
    pub fn node(&self) -> NodeId {
        match self {
            AnimatedEntity::Sun(s) => s.node,
            AnimatedEntity::Body(b) => b.node,
            AnimatedEntity::Moon(m) => m.node,
            AnimatedEntity::Asteroid(a) => a.node,
            AnimatedEntity::Shape(s) => s.node,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            AnimatedEntity::Sun(_) => "sun",
            AnimatedEntity::Body(_) => "body",
            AnimatedEntity::Moon(_) => "moon",
            AnimatedEntity::Asteroid(_) => "asteroid",
            AnimatedEntity::Shape(_) => "shape",
        }
    }
}
