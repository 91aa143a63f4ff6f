//! Software rasterizer: z-buffered, Gouraud-lit triangles into an RGB image.
//!
//! Lighting is evaluated per vertex in world space and interpolated across the
//! triangle. Triangles crossing the near plane are clipped, back faces are
//! culled. With supersampling on, every output pixel is the box-filtered
//! average of a `SUPERSAMPLE_FACTOR x SUPERSAMPLE_FACTOR` block of samples.

use arrayvec::ArrayVec;
use glam::{Mat3, Vec3, Vec4, Vec4Swizzles};

use crate::camera::Camera;
use crate::scene::Scene;
use crate::types::SUPERSAMPLE_FACTOR;

/// Linear RGB image produced by the rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u16,
    height: u16,
    pixels: Vec<Vec3>,
}

impl Image {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Vec3> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// Gamma-encoded 8-bit color of a pixel.
    pub fn rgb8(&self, x: u16, y: u16) -> Option<[u8; 3]> {
        self.get(x, y).map(to_srgb8)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.pixels
            .resize(usize::from(width) * usize::from(height), Vec3::ZERO);
    }
}

/// Clamp a linear color to `[0, 1]` and gamma-encode it.
pub fn to_srgb8(c: Vec3) -> [u8; 3] {
    let c = c.clamp(Vec3::ZERO, Vec3::ONE).powf(1.0 / 2.2) * 255.0 + 0.5;
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Per-frame counters, reset by every [`Rasterizer::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub triangles_drawn: usize,
    pub triangles_culled: usize,
    pub stars_drawn: usize,
}

#[derive(Debug, Clone, Copy)]
struct ClipVertex {
    pos: Vec4,
    color: Vec3,
}

#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    z: f32,
    color: Vec3,
}

/// Sample buffers at supersampled resolution.
struct Target<'a> {
    samples: &'a mut [Vec3],
    depth: &'a mut [f32],
    width: usize,
    height: usize,
}

impl Target<'_> {
    fn to_screen(&self, v: ClipVertex) -> ScreenVertex {
        let ndc = v.pos.xyz() / v.pos.w;
        ScreenVertex {
            x: (ndc.x * 0.5 + 0.5) * self.width as f32,
            y: (0.5 - ndc.y * 0.5) * self.height as f32,
            z: ndc.z,
            color: v.color,
        }
    }

    fn plot(&mut self, x: usize, y: usize, z: f32, color: Vec3) {
        let i = y * self.width + x;
        if z < self.depth[i] {
            self.depth[i] = z;
            self.samples[i] = color;
        }
    }

    /// Fill one screen triangle. Returns `false` if it faces away.
    fn fill(&mut self, a: ScreenVertex, b: ScreenVertex, c: ScreenVertex) -> bool {
        // Counter-clockwise in NDC is clockwise once y points down.
        let area = edge(a.x, a.y, b.x, b.y, c.x, c.y);
        if area >= 0.0 {
            return false;
        }

        let x0 = a.x.min(b.x).min(c.x).floor().max(0.0) as usize;
        let x1 = a.x.max(b.x).max(c.x).ceil().min(self.width as f32) as usize;
        let y0 = a.y.min(b.y).min(c.y).floor().max(0.0) as usize;
        let y1 = a.y.max(b.y).max(c.y).ceil().min(self.height as f32) as usize;

        for y in y0..y1 {
            let py = y as f32 + 0.5;
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                let w0 = edge(b.x, b.y, c.x, c.y, px, py) / area;
                let w1 = edge(c.x, c.y, a.x, a.y, px, py) / area;
                let w2 = edge(a.x, a.y, b.x, b.y, px, py) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                if !(0.0..=1.0).contains(&z) {
                    continue;
                }
                self.plot(x, y, z, a.color * w0 + b.color * w1 + c.color * w2);
            }
        }
        true
    }
}

#[inline(always)]
fn edge(ax: f32, ay: f32, bx: f32, by: f32, px: f32, py: f32) -> f32 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Clip a triangle against the near plane (`z >= 0` in clip space).
fn clip_near(tri: [ClipVertex; 3]) -> ArrayVec<ClipVertex, 4> {
    let mut out = ArrayVec::new();
    for i in 0..3 {
        let a = tri[i];
        let b = tri[(i + 1) % 3];
        let (da, db) = (a.pos.z, b.pos.z);
        if da >= 0.0 {
            out.push(a);
        }
        if (da >= 0.0) != (db >= 0.0) {
            let t = da / (da - db);
            out.push(ClipVertex {
                pos: a.pos.lerp(b.pos, t),
                color: a.color.lerp(b.color, t),
            });
        }
    }
    out
}

/// Renders a [`Scene`] through a [`Camera`] into an [`Image`].
///
/// Buffers are kept between frames and only reallocated on resize.
pub struct Rasterizer {
    width: u16,
    height: u16,
    supersampling: bool,
    samples: Vec<Vec3>,
    depth: Vec<f32>,
    world: Vec<glam::Mat4>,
    verts: Vec<ClipVertex>,
    image: Image,
    stats: RenderStats,
}

impl Rasterizer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            supersampling: false,
            samples: Vec::new(),
            depth: Vec::new(),
            world: Vec::new(),
            verts: Vec::new(),
            image: Image::new(width, height),
            stats: RenderStats::default(),
        }
    }

    /// Output size in pixels.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            log::debug!("rasterizer resized to {width}x{height}");
        }
        self.width = width;
        self.height = height;
    }

    pub fn set_supersampling(&mut self, on: bool) {
        self.supersampling = on;
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    fn factor(&self) -> usize {
        if self.supersampling {
            usize::from(SUPERSAMPLE_FACTOR)
        } else {
            1
        }
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> &Image {
        let f = self.factor();
        let sw = usize::from(self.width) * f;
        let sh = usize::from(self.height) * f;

        self.samples.clear();
        self.samples.resize(sw * sh, scene.background);
        self.depth.clear();
        self.depth.resize(sw * sh, f32::INFINITY);
        self.stats = RenderStats::default();
        self.image.resize(self.width, self.height);
        if sw == 0 || sh == 0 {
            return &self.image;
        }

        let view_proj = camera.view_projection();
        scene.world_matrices_into(&mut self.world);

        let Self {
            samples,
            depth,
            world,
            verts,
            stats,
            ..
        } = self;
        let mut target = Target {
            samples,
            depth,
            width: sw,
            height: sh,
        };

        for star in scene.stars() {
            let clip = view_proj * star.position.extend(1.0);
            if clip.z < 0.0 {
                continue;
            }
            let s = target.to_screen(ClipVertex {
                pos: clip,
                color: Vec3::splat(star.brightness),
            });
            if s.x < 0.0 || s.y < 0.0 || s.z > 1.0 {
                continue;
            }
            // Fill the whole output pixel so supersampling does not dim stars.
            let (px, py) = ((s.x as usize / f) * f, (s.y as usize / f) * f);
            if px + f > sw || py + f > sh {
                continue;
            }
            for y in py..py + f {
                for x in px..px + f {
                    target.plot(x, y, s.z, s.color);
                }
            }
            stats.stars_drawn += 1;
        }

        for (node, model) in scene.nodes().iter().zip(world.iter()) {
            let Some(mesh_id) = node.mesh() else {
                continue;
            };
            let mesh = scene.mesh(mesh_id);
            let normal_matrix = Mat3::from_mat4(*model).inverse().transpose();

            verts.clear();
            for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
                let wp = model.transform_point3(*p);
                let wn = (normal_matrix * *n).normalize_or_zero();
                let light: Vec3 = scene.lights().iter().map(|l| l.illuminate(wp, wn)).sum();
                verts.push(ClipVertex {
                    pos: view_proj * wp.extend(1.0),
                    color: node.material.color * light + node.material.emissive,
                });
            }

            for &[a, b, c] in mesh.triangles() {
                let poly = clip_near([verts[a as usize], verts[b as usize], verts[c as usize]]);
                if poly.len() < 3 {
                    continue;
                }
                let screen: ArrayVec<ScreenVertex, 4> =
                    poly.iter().map(|v| target.to_screen(*v)).collect();
                let mut front = false;
                for i in 1..screen.len() - 1 {
                    front |= target.fill(screen[0], screen[i], screen[i + 1]);
                }
                if front {
                    stats.triangles_drawn += 1;
                } else {
                    stats.triangles_culled += 1;
                }
            }
        }

        self.resolve(sw, f);
        &self.image
    }

    /// Downsample the sample buffer into the output image.
    fn resolve(&mut self, sample_width: usize, f: usize) {
        let w = usize::from(self.width);
        let h = usize::from(self.height);
        let inv = 1.0 / (f * f) as f32;
        for y in 0..h {
            for x in 0..w {
                let mut acc = Vec3::ZERO;
                for sy in 0..f {
                    let row = (y * f + sy) * sample_width;
                    for sx in 0..f {
                        acc += self.samples[row + x * f + sx];
                    }
                }
                self.image.pixels[y * w + x] = acc * inv;
            }
        }
    }
}
