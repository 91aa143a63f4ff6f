//! Per-frame animation.
//!
//! Positions are set absolutely from `time`, so they never depend on frame
//! history. Spin is integrated from `delta` and therefore does: the two must
//! stay separate. Nothing here divides by `delta`; a zero delta leaves every
//! accumulated rotation untouched and a huge one is applied as is.

use glam::Vec3;

use crate::engine::Scene;
use crate::entity::{AnimatedEntity, Asteroid, GardenShape, LightSweep, Moon, OrbitalBody, Sun};
use crate::scenes::SceneHandle;

/// Orbit angle at `time`; unbounded, fed straight into sin/cos.
#[inline]
pub fn orbit_angle(time: f32, speed: f32) -> f32 {
    time * speed
}

/// Vertical bob `amplitude * sin(time * frequency + phase)`.
#[inline]
pub fn bob(time: f32, amplitude: f32, frequency: f32, phase: f32) -> f32 {
    amplitude * (time * frequency + phase).sin()
}

/// Point on a circle in the XZ plane.
#[inline]
fn on_circle(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

/// Advance every entity and light sweep of `handle` to `time`.
pub fn animate(handle: &mut SceneHandle, time: f32, delta: f32) {
    let SceneHandle {
        scene,
        entities,
        sweeps,
        ..
    } = handle;

    for entity in entities.iter() {
        match entity {
            AnimatedEntity::Sun(s) => animate_sun(scene, s, time, delta),
            AnimatedEntity::Body(b) => animate_body(scene, b, time, delta),
            AnimatedEntity::Moon(m) => animate_moon(scene, m, time),
            AnimatedEntity::Asteroid(a) => animate_asteroid(scene, a, time, delta),
            AnimatedEntity::Shape(s) => animate_shape(scene, s, time, delta),
        }
    }

    for sweep in sweeps.iter() {
        sweep_light(scene, sweep, time);
    }
}

fn animate_sun(scene: &mut Scene, sun: &Sun, time: f32, delta: f32) {
    let t = scene.transform_mut(sun.node);
    t.scale = Vec3::splat(1.0 + bob(time, sun.pulse_amplitude, sun.pulse_frequency, 0.0));
    t.rotation.y += sun.spin_speed * delta;
}

fn animate_body(scene: &mut Scene, body: &OrbitalBody, time: f32, delta: f32) {
    scene.transform_mut(body.pivot).rotation.x = body.tilt;
    let angle = orbit_angle(time, body.orbit_speed);
    let t = scene.transform_mut(body.node);
    t.translation = on_circle(body.orbit_radius, angle, body.vertical_offset);
    t.rotation.y += body.spin_speed * delta;
}

fn animate_moon(scene: &mut Scene, moon: &Moon, time: f32) {
    let angle = orbit_angle(time, moon.orbit_speed);
    scene.transform_mut(moon.node).translation = on_circle(moon.orbit_radius, angle, 0.0);
}

/// Where `rock` sits at `time`: drifting on its circle, bobbing about
/// `base_height`. Builders place rocks with `time = 0`.
pub fn asteroid_position(rock: &Asteroid, time: f32) -> Vec3 {
    let angle = rock.drift_angle + orbit_angle(time, rock.drift_speed);
    let y = rock.base_height + bob(time, rock.bob_amplitude, rock.bob_frequency, rock.drift_angle);
    on_circle(rock.drift_radius, angle, y)
}

/// Bobbing position of a garden shape above its spiral slot.
pub fn shape_position(shape: &GardenShape, time: f32) -> Vec3 {
    let (phase, speed) = (shape.phase(), shape.speed());
    let lift = bob(time, GardenShape::BOB_AMPLITUDE, speed * 2.0, phase);
    shape.base + Vec3::Y * lift
}

/// Uniform pulse scale of a garden shape.
pub fn shape_scale(shape: &GardenShape, time: f32) -> f32 {
    1.0 + bob(time, GardenShape::PULSE_AMPLITUDE, shape.speed(), shape.phase())
}

fn animate_asteroid(scene: &mut Scene, rock: &Asteroid, time: f32, delta: f32) {
    let t = scene.transform_mut(rock.node);
    t.translation = asteroid_position(rock, time);
    t.rotation.x += rock.spin.x * delta;
    t.rotation.y += rock.spin.y * delta;
}

fn animate_shape(scene: &mut Scene, shape: &GardenShape, time: f32, delta: f32) {
    let speed = shape.speed();
    let t = scene.transform_mut(shape.node);
    t.translation = shape_position(shape, time);
    t.rotation.x += speed * delta;
    t.rotation.y += speed * 0.6 * delta;
    t.scale = Vec3::splat(shape_scale(shape, time));
}

fn sweep_light(scene: &mut Scene, sweep: &LightSweep, time: f32) {
    let arg = sweep.frequency * time + sweep.phase;
    let wave = Vec3::new(arg.x.sin(), arg.y.sin(), arg.z.sin());
    scene
        .light_mut(sweep.light)
        .set_position(sweep.center + sweep.amplitude * wave);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Light, Transform};
    use crate::scenes::SceneHandle;
    use glam::Vec2;

    fn single(entity: impl FnOnce(&mut Scene) -> AnimatedEntity) -> SceneHandle {
        let mut scene = Scene::new();
        let e = entity(&mut scene);
        SceneHandle::new(scene, vec![e], Vec::new())
    }

    fn body_handle() -> (SceneHandle, OrbitalBody) {
        let mut body = None;
        let handle = single(|scene| {
            let pivot = scene.add_group(None, Transform::IDENTITY);
            let node = scene.add_group(Some(pivot), Transform::IDENTITY);
            let b = OrbitalBody {
                node,
                pivot,
                orbit_radius: 5.0,
                orbit_speed: 0.8,
                spin_speed: 1.7,
                tilt: 0.0,
                vertical_offset: 0.5,
            };
            body = Some(b);
            AnimatedEntity::Body(b)
        });
        (handle, body.unwrap())
    }

    #[test]
    fn orbit_position_is_independent_of_frame_history() {
        let (mut coarse, b) = body_handle();
        let (mut fine, _) = body_handle();

        animate(&mut coarse, 3.0, 3.0);
        let mut t = 0.0;
        for _ in 0..300 {
            t += 0.01;
            animate(&mut fine, t, 0.01);
        }
        // Re-evaluate at exactly the same time to isolate history from clock drift.
        animate(&mut fine, 3.0, 0.0);

        let a = coarse.scene.transform(b.node).translation;
        let c = fine.scene.transform(b.node).translation;
        assert!(a.abs_diff_eq(c, 1e-5), "{a} vs {c}");
        assert!(a.abs_diff_eq(on_circle(5.0, 2.4, 0.5), 1e-5));
    }

    #[test]
    fn spin_integrates_linearly() {
        let (mut steps, b) = body_handle();
        let (mut once, _) = body_handle();

        for i in 1..=50 {
            animate(&mut steps, i as f32 * 0.02, 0.02);
        }
        animate(&mut once, 1.0, 1.0);

        let a = steps.scene.transform(b.node).rotation.y;
        let c = once.scene.transform(b.node).rotation.y;
        assert!((a - c).abs() < 1e-4, "{a} vs {c}");
        assert!((c - 1.7).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_leaves_spin_alone() {
        let (mut h, b) = body_handle();
        animate(&mut h, 1.0, 0.25);
        let before = h.scene.transform(b.node).rotation;
        for t in [2.0, 5.0, 100.0] {
            animate(&mut h, t, 0.0);
        }
        assert_eq!(h.scene.transform(b.node).rotation, before);
    }

    #[test]
    fn huge_delta_is_not_clamped() {
        let (mut h, b) = body_handle();
        animate(&mut h, 0.0, 1.0e4);
        assert_eq!(h.scene.transform(b.node).rotation.y, 1.7e4);
    }

    #[test]
    fn moon_orbits_in_parent_frame() {
        let mut moon = None;
        let mut h = single(|scene| {
            let node = scene.add_group(None, Transform::IDENTITY);
            let m = Moon {
                node,
                orbit_radius: 2.0,
                orbit_speed: std::f32::consts::FRAC_PI_2,
            };
            moon = Some(m);
            AnimatedEntity::Moon(m)
        });
        let m = moon.unwrap();
        animate(&mut h, 1.0, 0.5);
        let p = h.scene.transform(m.node).translation;
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5), "{p}");
        assert_eq!(h.scene.transform(m.node).rotation, Vec3::ZERO);
    }

    #[test]
    fn asteroid_spins_on_two_axes_and_bobs() {
        let mut rock = None;
        let mut h = single(|scene| {
            let node = scene.add_group(None, Transform::IDENTITY);
            let a = Asteroid {
                node,
                spin: Vec2::new(0.5, -1.0),
                drift_angle: 0.0,
                drift_radius: 10.0,
                drift_speed: 0.1,
                base_height: 1.0,
                bob_amplitude: 0.5,
                bob_frequency: std::f32::consts::PI,
            };
            rock = Some(a);
            AnimatedEntity::Asteroid(a)
        });
        let a = rock.unwrap();
        animate(&mut h, 0.5, 2.0);
        let t = *h.scene.transform(a.node);
        assert!((t.rotation.x - 1.0).abs() < 1e-6);
        assert!((t.rotation.y + 2.0).abs() < 1e-6);
        assert!((t.translation.y - 1.5).abs() < 1e-5);
        let flat = Vec2::new(t.translation.x, t.translation.z).length();
        assert!((flat - 10.0).abs() < 1e-4);
    }

    #[test]
    fn sweep_moves_point_light_per_axis() {
        let mut scene = Scene::new();
        let light = scene
            .add_light(Light::point(Vec3::ZERO, Vec3::ONE, 1.0, 0.0))
            .unwrap();
        let sweep = LightSweep {
            light,
            center: Vec3::new(0.0, 3.0, 0.0),
            amplitude: Vec3::new(2.0, 1.0, 4.0),
            frequency: Vec3::new(1.0, 2.0, 0.0),
            phase: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
        };
        let mut h = SceneHandle::new(scene, Vec::new(), vec![sweep]);

        animate(&mut h, 0.0, 0.0);
        let p0 = h.scene.light(light).position().unwrap();
        assert!(p0.abs_diff_eq(Vec3::new(0.0, 3.0, 4.0), 1e-6));

        animate(&mut h, std::f32::consts::FRAC_PI_2, 0.1);
        let p1 = h.scene.light(light).position().unwrap();
        assert!(p1.abs_diff_eq(Vec3::new(2.0, 3.0, 4.0), 1e-5), "{p1}");
    }

    #[test]
    fn garden_shape_rests_at_base_at_time_zero_for_index_zero() {
        let mut shape = None;
        let mut h = single(|scene| {
            let node = scene.add_group(None, Transform::IDENTITY);
            let s = GardenShape {
                node,
                index: 0,
                base: Vec3::new(1.0, 0.3, -2.0),
            };
            shape = Some(s);
            AnimatedEntity::Shape(s)
        });
        let s = shape.unwrap();
        animate(&mut h, 0.0, 0.0);
        let t = *h.scene.transform(s.node);
        assert_eq!(t.translation, s.base);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn asteroid_spin_integrates_linearly_on_both_axes() {
        let rock = |scene: &mut Scene| {
            let node = scene.add_group(None, Transform::IDENTITY);
            AnimatedEntity::Asteroid(Asteroid {
                node,
                spin: Vec2::new(0.9, -0.35),
                drift_angle: 1.0,
                drift_radius: 12.0,
                drift_speed: 0.05,
                base_height: 0.5,
                bob_amplitude: 0.2,
                bob_frequency: 0.6,
            })
        };
        let mut steps = single(rock);
        let mut once = single(rock);
        let node = steps.entities[0].node();

        for i in 1..=40 {
            animate(&mut steps, i as f32 * 0.05, 0.05);
        }
        animate(&mut once, 2.0, 2.0);

        let a = steps.scene.transform(node).rotation;
        let c = once.scene.transform(node).rotation;
        assert!(a.abs_diff_eq(c, 1e-4), "{a} vs {c}");
        assert!(c.abs_diff_eq(Vec3::new(1.8, -0.7, 0.0), 1e-6));
        // Position depends on time alone.
        let pa = steps.scene.transform(node).translation;
        let pc = once.scene.transform(node).translation;
        assert!(pa.abs_diff_eq(pc, 1e-4), "{pa} vs {pc}");
    }

    #[test]
    fn body_keeps_its_pivot_tilt() {
        let (mut h, b) = body_handle();
        h.scene.transform_mut(b.pivot).rotation.x = 1.0;
        animate(&mut h, 2.0, 0.1);
        assert_eq!(h.scene.transform(b.pivot).rotation.x, b.tilt);
    }

    #[test]
    fn bob_is_pure() {
        assert_eq!(bob(0.0, 2.0, 5.0, 0.0), 0.0);
        assert!((bob(1.0, 2.0, std::f32::consts::FRAC_PI_2, 0.0) - 2.0).abs() < 1e-6);
        assert_eq!(bob(7.3, 0.4, 1.1, 0.2), bob(7.3, 0.4, 1.1, 0.2));
    }
}
