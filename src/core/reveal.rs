/// Easing curves used by the entrance and reveal tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power3Out,
    Power4Out,
}

impl Ease {
    /// Map linear progress in \[0, 1\] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Values a tween can interpolate.
pub trait Blend: Copy {
    fn blend(from: Self, to: Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn blend(from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * t
    }
}

/// Visual state of an animated element: opacity, vertical offset in CSS px,
/// uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn hidden_below(offset_px: f32) -> Pose {
        Pose {
            opacity: 0.0,
            y: offset_px,
            scale: 1.0,
        }
    }

    pub fn scaled(scale: f32) -> Pose {
        Pose { scale, ..Pose::REST }
    }

    pub fn transform_css(&self) -> String {
        format!("translateY({}px) scale({})", self.y, self.scale)
    }

    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }
}

impl Blend for Pose {
    fn blend(from: Pose, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: f32::blend(from.opacity, to.opacity, t),
            y: f32::blend(from.y, to.y, t),
            scale: f32::blend(from.scale, to.scale, t),
        }
    }
}

/// Fixed-duration interpolation between two values, optionally delayed.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Blend> {
    pub from: T,
    pub to: T,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl<T: Blend> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Value `elapsed` seconds after the tween was started.
    pub fn sample(&self, elapsed: f32) -> T {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return self.to;
        }
        T::blend(self.from, self.to, self.ease.apply(local / self.duration))
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }
}

/// Delay for the `index`-th element of a staggered group.
#[inline]
pub fn stagger(index: usize, step: f32) -> f32 {
    index as f32 * step
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealState {
    Hidden,
    Revealing { since: f32 },
    Revealed,
}

/// One-shot scroll trigger driving a group of tweens.
///
/// The group fires the first time its trigger element's top edge is at or
/// above `threshold` x viewport height, then plays once and never re-arms.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    pub threshold: f32,
    pub state: RevealState,
}

impl Reveal {
    pub fn on_scroll(threshold: f32) -> Self {
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    /// A group that is already playing, for page-load entrances.
    pub fn immediate(now: f32) -> Self {
        Self {
            threshold: f32::INFINITY,
            state: RevealState::Revealing { since: now },
        }
    }

    #[inline]
    pub fn crossed(&self, element_top: f32, viewport_height: f32) -> bool {
        element_top <= viewport_height * self.threshold
    }

    /// Feed the trigger element's current top edge. Returns true exactly once,
    /// on the hidden -> revealing transition.
    pub fn observe(&mut self, element_top: f32, viewport_height: f32, now: f32) -> bool {
        if self.state != RevealState::Hidden || !self.crossed(element_top, viewport_height) {
            return false;
        }
        self.state = RevealState::Revealing { since: now };
        true
    }

    /// Seconds since the group started playing, if it is playing.
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        match self.state {
            RevealState::Revealing { since } => Some((now - since).max(0.0)),
            _ => None,
        }
    }

    /// Mark the group revealed once `total` seconds of playback have passed.
    pub fn settle(&mut self, now: f32, total: f32) -> bool {
        match self.elapsed(now) {
            Some(e) if e >= total => {
                self.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}
