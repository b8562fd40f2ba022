use std::f32::consts::PI;

/// Vertex layout shared by the panorama sphere and the marker mesh.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Outward,
    /// Mirrored in x so the image reads correctly from the center and the
    /// counter-clockwise faces point at the origin.
    Inward,
}

/// UV sphere with `width_segments` around the equator and `height_segments`
/// pole to pole. `uv.y == 0` is the top pole, matching texture row order.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32, facing: Facing) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mirror = match facing {
        Facing::Outward => 1.0,
        Facing::Inward => -1.0,
    };

    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * 2.0 * PI;
            let unit = [
                -phi.cos() * theta.sin() * mirror,
                theta.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(MeshVertex {
                position: [unit[0] * radius, unit[1] * radius, unit[2] * radius],
                normal: [unit[0] * mirror, unit[1] * mirror, unit[2] * mirror],
                uv: [u, v],
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * (hs - 1) * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // pole rows collapse one triangle of each quad
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh { vertices, indices }
}

pub fn panorama_sphere() -> Mesh {
    use crate::constants::{SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS};
    uv_sphere(
        SPHERE_RADIUS,
        SPHERE_WIDTH_SEGMENTS,
        SPHERE_HEIGHT_SEGMENTS,
        Facing::Inward,
    )
}

/// Unit marker sphere; instances scale it by radius and hover state.
pub fn marker_sphere() -> Mesh {
    use crate::constants::MARKER_SEGMENTS;
    uv_sphere(1.0, MARKER_SEGMENTS, MARKER_SEGMENTS, Facing::Outward)
}
