use crate::core::{Pose, Reveal, RevealState, Tween};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// One element animated by a reveal group.
pub struct Track {
    el: web::HtmlElement,
    tween: Tween<Pose>,
}

impl Track {
    /// Puts the element in its starting pose right away so it stays hidden
    /// until its group fires.
    pub fn new(el: web::HtmlElement, tween: Tween<Pose>) -> Self {
        dom::apply_pose(&el, &tween.from);
        Self { el, tween }
    }
}

pub type OnEnter = Box<dyn FnOnce()>;

struct RevealGroup {
    trigger: Option<web::Element>,
    reveal: Reveal,
    tracks: Vec<Track>,
    on_enter: Option<OnEnter>,
}

impl RevealGroup {
    fn total(&self) -> f32 {
        self.tracks
            .iter()
            .map(|t| t.tween.end_time())
            .fold(0.0, f32::max)
    }
}

/// Drives page-load entrances and one-shot scroll reveals.
///
/// Triggers are evaluated on scroll (and once when a group is added); poses
/// are written every animation frame while a group is playing. Finished
/// groups are dropped.
pub struct Animator {
    clock: Instant,
    groups: Vec<RevealGroup>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            clock: Instant::now(),
            groups: Vec::new(),
        }
    }

    /// Seconds since the animator was created.
    #[inline]
    pub fn now(&self) -> f32 {
        self.clock.elapsed().as_secs_f32()
    }

    /// Start playing `tracks` immediately.
    pub fn play_now(&mut self, tracks: Vec<Track>) {
        let now = self.now();
        self.groups.push(RevealGroup {
            trigger: None,
            reveal: Reveal::immediate(now),
            tracks,
            on_enter: None,
        });
    }

    /// Play `tracks` the first time `trigger` scrolls past `threshold`.
    pub fn play_on_scroll(
        &mut self,
        trigger: web::Element,
        threshold: f32,
        tracks: Vec<Track>,
        on_enter: Option<OnEnter>,
    ) {
        self.groups.push(RevealGroup {
            trigger: Some(trigger),
            reveal: Reveal::on_scroll(threshold),
            tracks,
            on_enter,
        });
        // An element already inside the threshold fires without waiting for a scroll
        self.observe_scroll();
    }

    pub fn observe_scroll(&mut self) {
        let now = self.now();
        let viewport_h = dom::viewport_height();
        for g in self.groups.iter_mut() {
            if g.reveal.state != RevealState::Hidden {
                continue;
            }
            let Some(trigger) = &g.trigger else {
                continue;
            };
            let top = trigger.get_bounding_client_rect().top() as f32;
            if g.reveal.observe(top, viewport_h, now) {
                log::debug!("[reveal] {} fired", trigger.class_name());
                if let Some(cb) = g.on_enter.take() {
                    cb();
                }
            }
        }
    }

    /// Write the current pose of every playing track.
    pub fn tick(&mut self) {
        let now = self.now();
        for g in self.groups.iter_mut() {
            let Some(elapsed) = g.reveal.elapsed(now) else {
                continue;
            };
            g.tracks.retain(|t| t.el.is_connected());
            for t in &g.tracks {
                dom::apply_pose(&t.el, &t.tween.sample(elapsed));
            }
            let total = g.total();
            g.reveal.settle(now, total);
        }
        self.groups
            .retain(|g| g.reveal.state != RevealState::Revealed);
    }

    pub fn pending(&self) -> usize {
        self.groups.len()
    }
}
