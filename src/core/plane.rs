/// One vertex of the hero plane as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh for a flat, subdivided plane in the XY plane.
pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
}

/// Build a `width` x `height` plane centred on the origin with `segments`
/// subdivisions per side.
///
/// Rows run top to bottom, so `uv.y` is 1 on the first row and 0 on the last;
/// each grid cell contributes two counter-clockwise triangles facing +Z.
pub fn build_plane(width: f32, height: f32, segments: u32) -> PlaneMesh {
    let segs = segments.max(1);
    let cols = segs + 1;
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let seg_w = width / segs as f32;
    let seg_h = height / segs as f32;

    let mut vertices = Vec::with_capacity((cols * cols) as usize);
    for iy in 0..cols {
        let y = half_h - iy as f32 * seg_h;
        for ix in 0..cols {
            let x = ix as f32 * seg_w - half_w;
            vertices.push(PlaneVertex {
                position: [x, y, 0.0],
                uv: [ix as f32 / segs as f32, 1.0 - iy as f32 / segs as f32],
            });
        }
    }

    let mut indices = Vec::with_capacity((segs * segs * 6) as usize);
    for iy in 0..segs {
        for ix in 0..segs {
            let a = ix + cols * iy;
            let b = ix + cols * (iy + 1);
            let c = (ix + 1) + cols * (iy + 1);
            let d = (ix + 1) + cols * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    PlaneMesh { vertices, indices }
}
