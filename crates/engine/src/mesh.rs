//! Triangle meshes and the procedural shape palette.
//!
//! Meshes are indexed triangle lists with one normal per vertex. Front faces
//! are counter-clockwise when seen from outside. Flat-shaded solids duplicate
//! their vertices per face so each face carries its own normal.

use glam::Vec3;

/// Indexed triangle mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Build a smooth mesh from per-vertex normals.
    ///
    /// Triangles are re-wound so their geometric normal agrees with the
    /// supplied vertex normals. Zero-area triangles (sphere poles) are dropped.
    fn smooth(positions: Vec<Vec3>, normals: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        let triangles = triangles
            .into_iter()
            .filter_map(|[a, b, c]| {
                let (pa, pb, pc) = (
                    positions[a as usize],
                    positions[b as usize],
                    positions[c as usize],
                );
                let face = (pb - pa).cross(pc - pa);
                if face.length_squared() <= 1e-12 {
                    return None;
                }
                let avg = normals[a as usize] + normals[b as usize] + normals[c as usize];
                if face.dot(avg) < 0.0 {
                    Some([a, c, b])
                } else {
                    Some([a, b, c])
                }
            })
            .collect();
        Self {
            positions,
            normals,
            triangles,
        }
    }

    /// Build a flat-shaded convex solid from shared corner positions.
    ///
    /// Faces are re-wound to point away from the origin, so the solid must
    /// contain the origin.
    pub fn from_faces(corners: &[Vec3], faces: &[[u32; 3]]) -> Self {
        let mut positions = Vec::with_capacity(faces.len() * 3);
        let mut normals = Vec::with_capacity(faces.len() * 3);
        let mut triangles = Vec::with_capacity(faces.len());

        for &[a, b, c] in faces {
            let (pa, mut pb, mut pc) = (
                corners[a as usize],
                corners[b as usize],
                corners[c as usize],
            );
            let mut n = (pb - pa).cross(pc - pa);
            if n.length_squared() <= 1e-12 {
                continue;
            }
            let centroid = (pa + pb + pc) / 3.0;
            if n.dot(centroid) < 0.0 {
                std::mem::swap(&mut pb, &mut pc);
                n = -n;
            }
            let n = n.normalize();
            let base = positions.len() as u32;
            for p in [pa, pb, pc] {
                positions.push(p);
                normals.push(n);
            }
            triangles.push([base, base + 1, base + 2]);
        }

        Self {
            positions,
            normals,
            triangles,
        }
    }

    /// UV sphere centered on the origin.
    pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);
        let mut positions = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());

        for r in 0..=rings {
            let phi = std::f32::consts::PI * r as f32 / rings as f32;
            // Exact poles so their collapsed triangles are recognised as degenerate.
            let (sin_phi, cos_phi) = match r {
                0 => (0.0, 1.0),
                r if r == rings => (0.0, -1.0),
                _ => phi.sin_cos(),
            };
            for s in 0..=segments {
                let theta = std::f32::consts::TAU * s as f32 / segments as f32;
                let n = Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin());
                positions.push(n * radius);
                normals.push(n);
            }
        }

        let stride = segments + 1;
        let mut triangles = Vec::with_capacity((segments * rings * 2) as usize);
        for r in 0..rings {
            for s in 0..segments {
                let i0 = r * stride + s;
                let i1 = i0 + 1;
                let i2 = i0 + stride;
                let i3 = i2 + 1;
                triangles.push([i0, i2, i1]);
                triangles.push([i1, i2, i3]);
            }
        }

        Self::smooth(positions, normals, triangles)
    }

    /// Torus lying in the XZ plane.
    pub fn torus(major: f32, minor: f32, segments: u32, sides: u32) -> Self {
        let segments = segments.max(3);
        let sides = sides.max(3);
        let mut positions = Vec::with_capacity(((segments + 1) * (sides + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());

        for s in 0..=segments {
            let u = std::f32::consts::TAU * s as f32 / segments as f32;
            let center = Vec3::new(u.cos() * major, 0.0, u.sin() * major);
            for t in 0..=sides {
                let v = std::f32::consts::TAU * t as f32 / sides as f32;
                let n = Vec3::new(v.cos() * u.cos(), v.sin(), v.cos() * u.sin());
                positions.push(center + n * minor);
                normals.push(n);
            }
        }

        let stride = sides + 1;
        let mut triangles = Vec::with_capacity((segments * sides * 2) as usize);
        for s in 0..segments {
            for t in 0..sides {
                let i0 = s * stride + t;
                let i1 = i0 + 1;
                let i2 = i0 + stride;
                let i3 = i2 + 1;
                triangles.push([i0, i1, i2]);
                triangles.push([i1, i3, i2]);
            }
        }

        Self::smooth(positions, normals, triangles)
    }

    /// Flat disc in the XZ plane facing +Y.
    pub fn disc(radius: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let mut positions = vec![Vec3::ZERO];
        for s in 0..segments {
            let a = std::f32::consts::TAU * s as f32 / segments as f32;
            positions.push(Vec3::new(a.cos() * radius, 0.0, a.sin() * radius));
        }
        let normals = vec![Vec3::Y; positions.len()];
        let triangles = (0..segments)
            .map(|s| [0, 1 + s, 1 + (s + 1) % segments])
            .collect();
        Self::smooth(positions, normals, triangles)
    }

    /// Axis-aligned box centered on the origin.
    pub fn cuboid(size: Vec3) -> Self {
        let h = size * 0.5;
        let corners: Vec<Vec3> = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -h.x } else { h.x },
                    if i & 2 == 0 { -h.y } else { h.y },
                    if i & 4 == 0 { -h.z } else { h.z },
                )
            })
            .collect();
        const FACES: [[u32; 3]; 12] = [
            [0, 1, 3],
            [0, 3, 2],
            [4, 6, 7],
            [4, 7, 5],
            [0, 4, 5],
            [0, 5, 1],
            [2, 3, 7],
            [2, 7, 6],
            [0, 2, 6],
            [0, 6, 4],
            [1, 5, 7],
            [1, 7, 3],
        ];
        Self::from_faces(&corners, &FACES)
    }

    pub fn tetrahedron(radius: f32) -> Self {
        let s = radius / 3f32.sqrt();
        let corners = [
            Vec3::new(s, s, s),
            Vec3::new(-s, -s, s),
            Vec3::new(-s, s, -s),
            Vec3::new(s, -s, -s),
        ];
        Self::from_faces(&corners, &[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]])
    }

    pub fn octahedron(radius: f32) -> Self {
        let corners = [
            Vec3::X * radius,
            -Vec3::X * radius,
            Vec3::Y * radius,
            -Vec3::Y * radius,
            Vec3::Z * radius,
            -Vec3::Z * radius,
        ];
        Self::from_faces(
            &corners,
            &[
                [0, 2, 4],
                [0, 4, 3],
                [0, 3, 5],
                [0, 5, 2],
                [1, 2, 5],
                [1, 5, 3],
                [1, 3, 4],
                [1, 4, 2],
            ],
        )
    }

    pub fn icosahedron(radius: f32) -> Self {
        Self::icosahedron_with(radius, |p| p)
    }

    /// Icosahedron whose corners are passed through `displace` first.
    ///
    /// Used for lumpy rocks: the displacement must keep the origin inside.
    pub fn icosahedron_with(radius: f32, mut displace: impl FnMut(Vec3) -> Vec3) -> Self {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let raw = [
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ];
        let corners: Vec<Vec3> = raw
            .iter()
            .map(|p| displace(p.normalize() * radius))
            .collect();
        const FACES: [[u32; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];
        Self::from_faces(&corners, &FACES)
    }

    /// Cone with its apex on +Y, centered vertically on the origin.
    pub fn cone(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let mut corners = vec![Vec3::Y * (height * 0.5), -Vec3::Y * (height * 0.5)];
        for s in 0..segments {
            let a = std::f32::consts::TAU * s as f32 / segments as f32;
            corners.push(Vec3::new(a.cos() * radius, -height * 0.5, a.sin() * radius));
        }
        let mut faces = Vec::with_capacity(segments as usize * 2);
        for s in 0..segments {
            let a = 2 + s;
            let b = 2 + (s + 1) % segments;
            faces.push([0, a, b]);
            faces.push([1, b, a]);
        }
        Self::from_faces(&corners, &faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(mesh: &Mesh, tri: [u32; 3]) -> Vec3 {
        let p = mesh.positions();
        let [a, b, c] = tri.map(|i| p[i as usize]);
        (b - a).cross(c - a)
    }

    fn assert_outward_from_origin(mesh: &Mesh) {
        for &tri in mesh.triangles() {
            let p = mesh.positions();
            let centroid = tri.iter().map(|&i| p[i as usize]).sum::<Vec3>() / 3.0;
            assert!(
                face_normal(mesh, tri).dot(centroid) > 0.0,
                "inward face {tri:?}"
            );
        }
    }

    #[test]
    fn sphere_faces_point_outward() {
        let m = Mesh::uv_sphere(2.0, 12, 8);
        assert!(m.triangle_count() > 0);
        assert_outward_from_origin(&m);
        for (p, n) in m.positions().iter().zip(m.normals()) {
            assert!((p.length() - 2.0).abs() < 1e-4);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_drops_degenerate_pole_triangles() {
        let m = Mesh::uv_sphere(1.0, 8, 4);
        // Two pole rows contribute one real triangle per quad instead of two.
        assert_eq!(m.triangle_count(), (8 * 4 * 2 - 2 * 8) as usize);
    }

    #[test]
    fn platonic_solids_have_expected_face_counts() {
        assert_eq!(Mesh::tetrahedron(1.0).triangle_count(), 4);
        assert_eq!(Mesh::cuboid(Vec3::ONE).triangle_count(), 12);
        assert_eq!(Mesh::octahedron(1.0).triangle_count(), 8);
        assert_eq!(Mesh::icosahedron(1.0).triangle_count(), 20);
    }

    #[test]
    fn flat_solids_point_outward() {
        assert_outward_from_origin(&Mesh::tetrahedron(1.0));
        assert_outward_from_origin(&Mesh::cuboid(Vec3::new(1.0, 2.0, 3.0)));
        assert_outward_from_origin(&Mesh::octahedron(1.0));
        assert_outward_from_origin(&Mesh::icosahedron(1.0));
        assert_outward_from_origin(&Mesh::cone(1.0, 2.0, 10));
    }

    #[test]
    fn flat_normals_match_face_normals() {
        let m = Mesh::octahedron(1.5);
        for &tri in m.triangles() {
            let n = face_normal(&m, tri).normalize();
            for i in tri {
                assert!(m.normals()[i as usize].abs_diff_eq(n, 1e-5));
            }
        }
    }

    #[test]
    fn torus_faces_agree_with_vertex_normals() {
        let m = Mesh::torus(2.0, 0.5, 16, 8);
        for &tri in m.triangles() {
            let avg: Vec3 = tri.iter().map(|&i| m.normals()[i as usize]).sum();
            assert!(face_normal(&m, tri).dot(avg) > 0.0);
        }
    }

    #[test]
    fn disc_faces_up() {
        let m = Mesh::disc(3.0, 24);
        assert_eq!(m.triangle_count(), 24);
        for &tri in m.triangles() {
            assert!(face_normal(&m, tri).y > 0.0);
        }
    }

    #[test]
    fn displaced_icosahedron_stays_outward() {
        let mut k = 0u32;
        let m = Mesh::icosahedron_with(1.0, |p| {
            k += 1;
            p * (0.8 + 0.04 * (k % 5) as f32)
        });
        assert_eq!(k, 12);
        assert_outward_from_origin(&m);
    }
}
