use super::constants::{CARD_FLIP_DEG, CARD_TILT_DEG};

/// 3D rotation applied to a card's inner face, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRotation {
    pub x_deg: f32,
    pub y_deg: f32,
}

impl CardRotation {
    pub const NEUTRAL: CardRotation = CardRotation {
        x_deg: 0.0,
        y_deg: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.x_deg, self.y_deg)
    }
}

/// Rotation for a pointer at `(local_x, local_y)` inside a `width` x `height`
/// card (origin top-left).
///
/// Tilt is linear in the offset from the centre and is not clamped, so a
/// pointer outside the card tilts past the nominal maximum. Right of the
/// vertical centreline the card is flipped a further half turn around Y.
/// A card with no area stays neutral.
pub fn card_rotation(width: f32, height: f32, local_x: f32, local_y: f32) -> CardRotation {
    let cx = width / 2.0;
    let cy = height / 2.0;
    if !(cx > 0.0 && cy > 0.0) {
        return CardRotation::NEUTRAL;
    }
    let dx = local_x - cx;
    let dy = local_y - cy;
    let flip = if dx > 0.0 { CARD_FLIP_DEG } else { 0.0 };
    CardRotation {
        x_deg: (dy / cy) * CARD_TILT_DEG,
        y_deg: -(dx / cx) * CARD_TILT_DEG + flip,
    }
}
