//! Geometric garden: a palette of solids laid out on a spiral over a ground
//! disc, lit by three colored lights sweeping overhead.

use glam::Vec3;
use rand::{Rng, RngCore};

use super::{hsv, SceneHandle};
use crate::animate::{shape_position, shape_scale};
use crate::engine::{Light, Material, Mesh, Scene, Transform};
use crate::entity::{AnimatedEntity, GardenShape, LightSweep};

pub const SHAPE_COUNT: usize = 14;

/// Golden angle: successive shapes never line up radially.
const SPIRAL_STEP: f32 = 2.399_963;

/// Resting position of shape `index` on the spiral.
pub fn spiral_position(index: usize) -> Vec3 {
    let angle = index as f32 * SPIRAL_STEP;
    let radius = 1.2 + 0.5 * index as f32;
    Vec3::new(radius * angle.cos(), 0.3, radius * angle.sin())
}

pub fn build(rng: &mut dyn RngCore) -> SceneHandle {
    let mut scene = Scene::new();
    scene.background = Vec3::new(0.02, 0.03, 0.05);
    let mut entities = Vec::with_capacity(SHAPE_COUNT);
    let mut sweeps = Vec::new();

    scene.add_light(Light::ambient(Vec3::ONE, 0.18));

    let ground = scene.add_mesh(Mesh::disc(9.5, 48));
    scene.add_object(
        None,
        ground,
        Material::lit(Vec3::new(0.12, 0.3, 0.16)),
        Transform::from_translation(Vec3::new(0.0, -1.0, 0.0)),
    );

    let palette = [
        scene.add_mesh(Mesh::cuboid(Vec3::splat(0.9))),
        scene.add_mesh(Mesh::uv_sphere(0.55, 16, 12)),
        scene.add_mesh(Mesh::torus(0.45, 0.16, 20, 8)),
        scene.add_mesh(Mesh::octahedron(0.6)),
        scene.add_mesh(Mesh::icosahedron(0.55)),
        scene.add_mesh(Mesh::tetrahedron(0.65)),
        scene.add_mesh(Mesh::cone(0.45, 1.0, 14)),
    ];

    // Hue wobble keeps two builds from looking identical.
    let hue_shift: f32 = rng.random_range(0.0..1.0);
    for index in 0..SHAPE_COUNT {
        let base = spiral_position(index);
        let color = hsv(hue_shift + index as f32 / SHAPE_COUNT as f32, 0.65, 0.95);
        let node = scene.add_object(
            None,
            palette[index % palette.len()],
            Material::lit(color),
            Transform::IDENTITY,
        );
        let shape = GardenShape { node, index, base };
        let t = scene.transform_mut(node);
        t.translation = shape_position(&shape, 0.0);
        t.scale = Vec3::splat(shape_scale(&shape, 0.0));
        entities.push(AnimatedEntity::Shape(shape));
    }

    let lights = [
        (Vec3::new(1.0, 0.35, 0.3), Vec3::new(0.31, 0.53, 0.23), Vec3::ZERO),
        (Vec3::new(0.3, 1.0, 0.45), Vec3::new(0.23, 0.41, 0.37), Vec3::new(2.1, 1.0, 0.5)),
        (Vec3::new(0.35, 0.45, 1.0), Vec3::new(0.43, 0.29, 0.19), Vec3::new(4.2, 2.0, 3.1)),
    ];
    for (color, frequency, phase) in lights {
        let center = Vec3::new(0.0, 3.0, 0.0);
        if let Some(light) = scene.add_light(Light::point(center, color, 1.3, 18.0)) {
            sweeps.push(LightSweep {
                light,
                center,
                amplitude: Vec3::new(6.0, 1.5, 6.0),
                frequency,
                phase,
            });
        }
    }

    SceneHandle::new(scene, entities, sweeps)
}
