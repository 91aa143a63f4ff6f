//! Scene graph: a flat arena of transform nodes with optional meshes.
//!
//! Nodes reference their parent by id. A parent always exists before its
//! children, so world matrices resolve in a single forward pass.

use arrayvec::ArrayVec;
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::light::{Light, LightId};
use crate::mesh::Mesh;
use crate::types::MAX_LIGHTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

/// Local transform: scale, then XYZ Euler rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied as X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let r = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, r, self.translation)
    }
}

/// Surface appearance. `emissive` is added after lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
}

impl Material {
    pub fn lit(color: Vec3) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
        }
    }

    /// Self-illuminated surface that ignores lights.
    pub fn glowing(color: Vec3) -> Self {
        Self {
            color: Vec3::ZERO,
            emissive: color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    parent: Option<NodeId>,
    mesh: Option<MeshId>,
    pub transform: Transform,
    pub material: Material,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }
}

/// A background point, drawn unlit as a single pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub brightness: f32,
}

#[derive(Debug, Clone)]
pub struct Scene {
    meshes: Vec<Mesh>,
    nodes: Vec<Node>,
    lights: ArrayVec<Light, MAX_LIGHTS>,
    stars: Vec<Star>,
    pub background: Vec3,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            nodes: Vec::new(),
            lights: ArrayVec::new(),
            stars: Vec::new(),
            background: Vec3::ZERO,
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    /// Add an empty grouping node.
    pub fn add_group(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId {
        self.push_node(Node {
            parent,
            mesh: None,
            transform,
            material: Material::lit(Vec3::ONE),
        })
    }

    /// Add a node that draws `mesh`.
    pub fn add_object(
        &mut self,
        parent: Option<NodeId>,
        mesh: MeshId,
        material: Material,
        transform: Transform,
    ) -> NodeId {
        self.push_node(Node {
            parent,
            mesh: Some(mesh),
            transform,
            material,
        })
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Add a light. Returns `None` once the scene holds [`MAX_LIGHTS`].
    pub fn add_light(&mut self, light: Light) -> Option<LightId> {
        match self.lights.try_push(light) {
            Ok(()) => Some(LightId(self.lights.len() - 1)),
            Err(_) => {
                log::warn!("light limit of {MAX_LIGHTS} reached, dropping light");
                None
            }
        }
    }

    pub fn add_star(&mut self, star: Star) {
        self.stars.push(star);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn transform(&self, id: NodeId) -> &Transform {
        &self.nodes[id.0].transform
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn light(&self, id: LightId) -> &Light {
        &self.lights[id.0]
    }

    pub fn light_mut(&mut self, id: LightId) -> &mut Light {
        &mut self.lights[id.0]
    }

    pub fn mesh(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve every node's local-to-world matrix into `out` (indexed like `nodes()`).
    pub fn world_matrices_into(&self, out: &mut Vec<Mat4>) {
        out.clear();
        out.reserve(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let world = match node.parent {
                Some(p) => out[p.0] * local,
                None => local,
            };
            out.push(world);
        }
    }

    /// Local-to-world matrix of a single node.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = self.nodes[id.0].transform.matrix();
        let mut parent = self.nodes[id.0].parent;
        while let Some(p) = parent {
            m = self.nodes[p.0].transform.matrix() * m;
            parent = self.nodes[p.0].parent;
        }
        m
    }

    /// World-space origin of a node.
    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }
}
