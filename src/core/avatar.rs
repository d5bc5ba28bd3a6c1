use glam::Vec3;
use rand::Rng;

use super::constants::{
    AVATAR_ALPHA_THRESHOLD, AVATAR_COLOR, AVATAR_DRIFT_AMPLITUDE, AVATAR_PIXEL_DIVISOR,
    AVATAR_SAMPLE_STRIDE, AVATAR_Z_JITTER,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AvatarError {
    #[error("avatar image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Point cloud built from the opaque pixels of the avatar image.
///
/// Positions and colours are parallel arrays; the set is fixed once built and
/// only the z component of each position moves afterwards.
#[derive(Clone, Debug, Default)]
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
}

impl ParticleCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Per-frame float: nudge every particle's depth by `sin(time + i)`, where
    /// `i` is the index of its z component in the flat xyz buffer.
    pub fn drift(&mut self, time: f64) {
        for (k, p) in self.positions.iter_mut().enumerate() {
            let flat_index = (k * 3 + 2) as f64;
            p.z += (time + flat_index).sin() as f32 * AVATAR_DRIFT_AMPLITUDE;
        }
    }
}

/// Sample an RGBA8 pixel buffer on a stride-2 grid and emit one particle per
/// pixel whose alpha exceeds the opacity threshold.
pub fn sample_particles<R: Rng + ?Sized>(
    rgba: &[u8],
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<ParticleCloud, AvatarError> {
    if width == 0 || height == 0 {
        return Err(AvatarError::Empty { width, height });
    }
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(AvatarError::BufferSize {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    let half_jitter = AVATAR_Z_JITTER / 2.0;
    let mut cloud = ParticleCloud::default();
    for y in (0..height as usize).step_by(AVATAR_SAMPLE_STRIDE) {
        for x in (0..width as usize).step_by(AVATAR_SAMPLE_STRIDE) {
            let idx = (y * width as usize + x) * 4;
            if rgba[idx + 3] <= AVATAR_ALPHA_THRESHOLD {
                continue;
            }
            let vx = (x as f32 - half_w) / AVATAR_PIXEL_DIVISOR;
            let vy = -(y as f32 - half_h) / AVATAR_PIXEL_DIVISOR;
            let vz = rng.gen_range(-half_jitter..=half_jitter);
            cloud.positions.push(Vec3::new(vx, vy, vz));
            cloud.colors.push(AVATAR_COLOR);
        }
    }
    Ok(cloud)
}
