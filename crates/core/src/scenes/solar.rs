//! Solar system: an emissive sun, planets on tilted circular orbits, moons,
//! a ringed giant and a starfield.

use glam::Vec3;
use rand::RngCore;

use super::{scatter_stars, SceneHandle};
use crate::engine::{Light, Material, Mesh, Scene, Transform};
use crate::entity::{AnimatedEntity, Moon, OrbitalBody, Sun};

pub const SUN_RADIUS: f32 = 2.0;
/// Ring plane tilt relative to the orbital plane, about X.
const RING_TILT: f32 = 0.45;

/// Planet layout. Speeds in radians per second, angles in radians.
pub struct PlanetSpec {
    pub radius: f32,
    pub color: Vec3,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub spin_speed: f32,
    pub tilt: f32,
    pub vertical_offset: f32,
    /// `(orbit_radius, orbit_speed, size)` per moon.
    pub moons: &'static [(f32, f32, f32)],
    pub ring: bool,
}

pub const PLANETS: [PlanetSpec; 6] = [
    PlanetSpec {
        radius: 0.3,
        color: Vec3::new(0.55, 0.52, 0.5),
        orbit_radius: 4.0,
        orbit_speed: 1.2,
        spin_speed: 1.0,
        tilt: 0.05,
        vertical_offset: 0.0,
        moons: &[],
        ring: false,
    },
    PlanetSpec {
        radius: 0.5,
        color: Vec3::new(0.9, 0.75, 0.45),
        orbit_radius: 6.0,
        orbit_speed: 0.9,
        spin_speed: 0.6,
        tilt: 0.03,
        vertical_offset: 0.0,
        moons: &[],
        ring: false,
    },
    PlanetSpec {
        radius: 0.55,
        color: Vec3::new(0.2, 0.45, 0.95),
        orbit_radius: 8.5,
        orbit_speed: 0.7,
        spin_speed: 1.5,
        tilt: 0.08,
        vertical_offset: 0.0,
        moons: &[(1.0, 2.5, 0.15)],
        ring: false,
    },
    PlanetSpec {
        radius: 0.4,
        color: Vec3::new(0.85, 0.3, 0.15),
        orbit_radius: 11.0,
        orbit_speed: 0.55,
        spin_speed: 1.3,
        tilt: 0.06,
        vertical_offset: 0.2,
        moons: &[],
        ring: false,
    },
    PlanetSpec {
        radius: 1.1,
        color: Vec3::new(0.85, 0.65, 0.45),
        orbit_radius: 15.0,
        orbit_speed: 0.35,
        spin_speed: 2.2,
        tilt: 0.02,
        vertical_offset: -0.2,
        moons: &[(1.8, 1.6, 0.2), (2.4, 1.1, 0.16)],
        ring: false,
    },
    PlanetSpec {
        radius: 0.9,
        color: Vec3::new(0.9, 0.82, 0.55),
        orbit_radius: 19.5,
        orbit_speed: 0.25,
        spin_speed: 2.0,
        tilt: 0.1,
        vertical_offset: 0.0,
        moons: &[],
        ring: true,
    },
];

pub fn build(rng: &mut dyn RngCore) -> SceneHandle {
    let mut scene = Scene::new();
    scene.background = Vec3::new(0.0, 0.0, 0.02);
    let mut entities = Vec::new();

    scene.add_light(Light::ambient(Vec3::ONE, 0.12));
    scene.add_light(Light::point(Vec3::ZERO, Vec3::new(1.0, 0.95, 0.85), 1.6, 0.0));

    let sun_mesh = scene.add_mesh(Mesh::uv_sphere(SUN_RADIUS, 24, 16));
    let sun = scene.add_object(
        None,
        sun_mesh,
        Material::glowing(Vec3::new(1.0, 0.8, 0.3)),
        Transform::IDENTITY,
    );
    entities.push(AnimatedEntity::Sun(Sun {
        node: sun,
        spin_speed: 0.1,
        pulse_amplitude: 0.04,
        pulse_frequency: 1.5,
    }));

    let moon_mesh = scene.add_mesh(Mesh::uv_sphere(1.0, 10, 8));
    for planet in &PLANETS {
        let pivot = scene.add_group(
            None,
            Transform::IDENTITY.with_rotation(Vec3::new(planet.tilt, 0.0, 0.0)),
        );
        let mesh = scene.add_mesh(Mesh::uv_sphere(planet.radius, 20, 14));
        let node = scene.add_object(
            Some(pivot),
            mesh,
            Material::lit(planet.color),
            Transform::from_translation(Vec3::new(
                planet.orbit_radius,
                planet.vertical_offset,
                0.0,
            )),
        );
        entities.push(AnimatedEntity::Body(OrbitalBody {
            node,
            pivot,
            orbit_radius: planet.orbit_radius,
            orbit_speed: planet.orbit_speed,
            spin_speed: planet.spin_speed,
            tilt: planet.tilt,
            vertical_offset: planet.vertical_offset,
        }));

        for &(orbit_radius, orbit_speed, size) in planet.moons {
            let moon = scene.add_object(
                Some(node),
                moon_mesh,
                Material::lit(Vec3::splat(0.7)),
                Transform::from_translation(Vec3::new(orbit_radius, 0.0, 0.0)).with_scale(size),
            );
            entities.push(AnimatedEntity::Moon(Moon {
                node: moon,
                orbit_radius,
                orbit_speed,
            }));
        }

        if planet.ring {
            let ring = scene.add_mesh(Mesh::torus(
                planet.radius * 1.8,
                planet.radius * 0.12,
                32,
                6,
            ));
            // A sibling of the planet, not a child: it shares the orbit but
            // not the spin, so its tilted axis stays put.
            let mut t = Transform::from_translation(Vec3::new(
                planet.orbit_radius,
                planet.vertical_offset,
                0.0,
            ))
            .with_rotation(Vec3::new(RING_TILT, 0.0, 0.0));
            t.scale = Vec3::new(1.0, 0.35, 1.0);
            let ring = scene.add_object(
                Some(pivot),
                ring,
                Material::lit(Vec3::new(0.8, 0.72, 0.55)),
                t,
            );
            entities.push(AnimatedEntity::Body(OrbitalBody {
                node: ring,
                pivot,
                orbit_radius: planet.orbit_radius,
                orbit_speed: planet.orbit_speed,
                spin_speed: 0.0,
                tilt: planet.tilt,
                vertical_offset: planet.vertical_offset,
            }));
        }
    }

    scatter_stars(&mut scene, rng, 300, 120.0, 200.0);

    SceneHandle::new(scene, entities, Vec::new())
}
