//! Light sources and the Lambert lighting model.

use glam::Vec3;

/// Handle to a light stored in a [`crate::Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(pub(crate) usize);

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface.
    Ambient { color: Vec3, intensity: f32 },
    /// Parallel rays travelling along `direction`.
    Directional {
        direction: Vec3,
        color: Vec3,
        intensity: f32,
    },
    /// Omnidirectional light. `range <= 0` means no falloff.
    Point {
        position: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
    },
}

impl Light {
    pub fn ambient(color: Vec3, intensity: f32) -> Self {
        Light::Ambient { color, intensity }
    }

    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Light::Directional {
            direction: direction.normalize_or(Vec3::NEG_Y),
            color,
            intensity,
        }
    }

    pub fn point(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Light::Point {
            position,
            color,
            intensity,
            range,
        }
    }

    /// Current position of a point light.
    pub fn position(&self) -> Option<Vec3> {
        match self {
            Light::Point { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Move a point light. Other kinds have no position and are left alone.
    pub fn set_position(&mut self, to: Vec3) {
        if let Light::Point { position, .. } = self {
            *position = to;
        }
    }

    /// Diffuse contribution at a surface point with unit normal `normal`.
    pub fn illuminate(&self, point: Vec3, normal: Vec3) -> Vec3 {
        match *self {
            Light::Ambient { color, intensity } => color * intensity,
            Light::Directional {
                direction,
                color,
                intensity,
            } => color * intensity * normal.dot(-direction).max(0.0),
            Light::Point {
                position,
                color,
                intensity,
                range,
            } => {
                let to_light = position - point;
                let dist = to_light.length();
                if dist <= f32::EPSILON {
                    return color * intensity;
                }
                let lambert = normal.dot(to_light / dist).max(0.0);
                let falloff = if range > 0.0 {
                    let f = (1.0 - dist / range).max(0.0);
                    f * f
                } else {
                    1.0
                };
                color * intensity * lambert * falloff
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_ignores_orientation() {
        let l = Light::ambient(Vec3::ONE, 0.25);
        assert_eq!(l.illuminate(Vec3::ZERO, Vec3::Y), Vec3::splat(0.25));
        assert_eq!(l.illuminate(Vec3::ZERO, -Vec3::Y), Vec3::splat(0.25));
    }

    #[test]
    fn directional_lights_only_facing_side() {
        let l = Light::directional(Vec3::NEG_Y, Vec3::ONE, 1.0);
        assert_eq!(l.illuminate(Vec3::ZERO, Vec3::Y), Vec3::ONE);
        assert_eq!(l.illuminate(Vec3::ZERO, Vec3::NEG_Y), Vec3::ZERO);
    }

    #[test]
    fn point_light_falls_off_to_zero_at_range() {
        let l = Light::point(Vec3::new(0.0, 10.0, 0.0), Vec3::ONE, 1.0, 10.0);
        assert_eq!(l.illuminate(Vec3::ZERO, Vec3::Y), Vec3::ZERO);
        let near = l.illuminate(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!((near.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn only_point_lights_move() {
        let mut p = Light::point(Vec3::ZERO, Vec3::ONE, 1.0, 0.0);
        p.set_position(Vec3::X);
        assert_eq!(p.position(), Some(Vec3::X));

        let mut a = Light::ambient(Vec3::ONE, 1.0);
        a.set_position(Vec3::X);
        assert_eq!(a.position(), None);
    }
}
