use crate::carousel::timer::TimerSlot;
use crate::content::payloads::{HeroPayload, HeroSlide};
use crate::foundation::core::Millis;
use crate::media::video::{embed_url, extract_video_id};

/// Floor for any slide duration.
const MIN_SLIDE: Millis = Millis(1);

/// Carousel timing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOpts {
    /// Slide duration when the slide has no background video of known length.
    pub default_slide: Millis,
    /// Quiet period after manual navigation before autoplay resumes.
    pub resume_delay: Millis,
}

impl Default for CarouselOpts {
    fn default() -> Self {
        Self {
            default_slide: Millis(5000),
            resume_delay: Millis(10_000),
        }
    }
}

/// The parts of a slide that drive timing and the play button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideTiming {
    pub has_background_video: bool,
    pub video_duration: Option<Millis>,
    pub video_url: Option<String>,
}

impl SlideTiming {
    pub fn from_slide(slide: &HeroSlide) -> Self {
        Self {
            has_background_video: non_blank(slide.background_video.as_deref()).is_some(),
            video_duration: slide.video_duration.and_then(Millis::from_secs_f64),
            video_url: non_blank(slide.video_url.as_deref()).map(str::to_owned),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselState {
    /// No active slides; the hero renders a placeholder.
    Empty,
    /// Exactly one slide; nothing auto-advances.
    Idle { index: usize },
    AutoPlaying { index: usize },
    Paused { index: usize, resume_at: Millis },
    VideoOverlayOpen { index: usize, video_id: String },
    /// Torn down; every operation is a no-op.
    Disposed,
}

impl CarouselState {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Idle { index }
            | Self::AutoPlaying { index }
            | Self::Paused { index, .. }
            | Self::VideoOverlayOpen { index, .. } => Some(*index),
            Self::Empty | Self::Disposed => None,
        }
    }
}

/// Timer-driven transitions reported by [`HeroCarousel::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    Advanced { from: usize, to: usize, at: Millis },
    Resumed { index: usize, at: Millis },
}

/// What the host should do after the play button is activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoAction {
    /// Show the in-page player overlay.
    Overlay { video_id: String, embed_url: String },
    /// Open the link in a new browsing context.
    OpenExternal { url: String },
    /// The slide has no video link (or the carousel is not live).
    Unavailable,
}

/// Render-facing snapshot of the carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    /// Video id shown in the overlay player, if open.
    pub overlay: Option<String>,
}

/// Autoplay and interaction state machine for a hero carousel.
///
/// Time is supplied by the caller. At most one advance timer and one resume timer exist, and
/// every transition cancels both before arming the one it needs.
#[derive(Clone, Debug)]
pub struct HeroCarousel {
    slides: Vec<SlideTiming>,
    opts: CarouselOpts,
    state: CarouselState,
    advance: TimerSlot,
    resume: TimerSlot,
}

impl HeroCarousel {
    pub fn new(slides: Vec<SlideTiming>, opts: CarouselOpts, now: Millis) -> Self {
        let state = match slides.len() {
            0 => CarouselState::Empty,
            1 => CarouselState::Idle { index: 0 },
            _ => CarouselState::AutoPlaying { index: 0 },
        };
        let mut c = Self {
            slides,
            opts,
            state,
            advance: TimerSlot::default(),
            resume: TimerSlot::default(),
        };
        if matches!(c.state, CarouselState::AutoPlaying { .. }) {
            c.advance.schedule(now + c.slide_duration(0));
        }
        c
    }

    /// Build from a hero payload; inactive slides are skipped.
    pub fn from_payload(payload: &HeroPayload, opts: CarouselOpts, now: Millis) -> Self {
        let slides = payload
            .slides
            .iter()
            .filter(|s| s.is_active)
            .map(SlideTiming::from_slide)
            .collect();
        Self::new(slides, opts, now)
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.state.index()
    }

    /// How long slide `index` stays up before auto-advancing. Never shorter than 1 ms.
    pub fn slide_duration(&self, index: usize) -> Millis {
        let d = match self.slides.get(index) {
            Some(SlideTiming {
                has_background_video: true,
                video_duration: Some(d),
                ..
            }) => *d,
            _ => self.opts.default_slide,
        };
        d.max(MIN_SLIDE)
    }

    /// One full rotation through every slide.
    fn cycle(&self) -> Millis {
        (0..self.slides.len()).fold(Millis::ZERO, |acc, i| acc + self.slide_duration(i))
    }

    /// Earliest pending timer deadline, for the host event loop.
    pub fn next_deadline(&self) -> Option<Millis> {
        match (self.advance.deadline(), self.resume.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every timer due at or before `now`, in deadline order.
    ///
    /// Chained advances are scheduled from the deadline that fired, not from `now`, so a late
    /// tick replays the same sequence an on-time event loop would have produced. When the clock
    /// is more than two full rotations behind, the older whole rotations are skipped without
    /// events; they would end on the same slide anyway.
    pub fn tick(&mut self, now: Millis) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        loop {
            if let Some(due) = self.advance.take_due(now) {
                if let CarouselState::AutoPlaying { index } = self.state {
                    let at = self.skip_whole_cycles(due, now);
                    let to = (index + 1) % self.slides.len();
                    let next = at + self.slide_duration(to);
                    self.state = CarouselState::AutoPlaying { index: to };
                    self.advance.schedule(next);
                    events.push(CarouselEvent::Advanced { from: index, to, at });
                    // Saturated clock: the next deadline cannot move past this one.
                    if next <= at {
                        break;
                    }
                }
                continue;
            }
            if let Some(at) = self.resume.take_due(now) {
                if let CarouselState::Paused { index, .. } = self.state {
                    self.start_autoplay(index, at);
                    events.push(CarouselEvent::Resumed { index, at });
                }
                continue;
            }
            break;
        }
        events
    }

    pub fn next(&mut self, now: Millis) -> bool {
        match self.live_index() {
            Some(i) => self.go_to((i + 1) % self.slides.len(), now),
            None => false,
        }
    }

    pub fn prev(&mut self, now: Millis) -> bool {
        match self.live_index() {
            Some(i) => {
                let n = self.slides.len();
                self.go_to((i + n - 1) % n, now)
            }
            None => false,
        }
    }

    /// Manual navigation (dot click). Closes any overlay and pauses autoplay for the resume delay.
    ///
    /// Ignored when there is nothing to navigate between or `index` is out of range.
    pub fn go_to(&mut self, index: usize, now: Millis) -> bool {
        if self.live_index().is_none() || self.slides.len() < 2 || index >= self.slides.len() {
            return false;
        }
        self.pause_at(index, now);
        true
    }

    /// Play-button activation on the current slide.
    pub fn open_video(&mut self, now: Millis) -> VideoAction {
        let Some(index) = self.live_index() else {
            return VideoAction::Unavailable;
        };
        let Some(url) = self.slides[index].video_url.clone() else {
            return VideoAction::Unavailable;
        };

        self.cancel_timers();
        match extract_video_id(&url) {
            Some(video_id) => {
                let embed = embed_url(&video_id);
                self.state = CarouselState::VideoOverlayOpen {
                    index,
                    video_id: video_id.clone(),
                };
                VideoAction::Overlay {
                    video_id,
                    embed_url: embed,
                }
            }
            None => {
                tracing::debug!(%url, "video link has no embeddable id; opening externally");
                if self.slides.len() < 2 {
                    self.state = CarouselState::Idle { index };
                } else {
                    self.pause_at(index, now);
                }
                VideoAction::OpenExternal { url }
            }
        }
    }

    /// Close the overlay and resume autoplay immediately.
    pub fn close_video(&mut self, now: Millis) -> bool {
        let CarouselState::VideoOverlayOpen { index, .. } = self.state else {
            return false;
        };
        if self.slides.len() < 2 {
            self.state = CarouselState::Idle { index };
        } else {
            self.start_autoplay(index, now);
        }
        true
    }

    /// Tear down: clear both timers and make the machine inert.
    pub fn dispose(&mut self) {
        self.cancel_timers();
        self.state = CarouselState::Disposed;
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            index: self.state.index().unwrap_or(0),
            overlay: match &self.state {
                CarouselState::VideoOverlayOpen { video_id, .. } => Some(video_id.clone()),
                _ => None,
            },
        }
    }

    fn live_index(&self) -> Option<usize> {
        self.state.index()
    }

    fn cancel_timers(&mut self) {
        self.advance.cancel();
        self.resume.cancel();
    }

    fn pause_at(&mut self, index: usize, now: Millis) {
        self.cancel_timers();
        let resume_at = now + self.opts.resume_delay;
        self.state = CarouselState::Paused { index, resume_at };
        self.resume.schedule(resume_at);
    }

    /// Move an overdue deadline forward by whole rotations, keeping less than two behind `now`.
    fn skip_whole_cycles(&self, due: Millis, now: Millis) -> Millis {
        let cycle = self.cycle().0;
        let rotations = now.saturating_sub(due).0 / cycle;
        if rotations < 2 {
            return due;
        }
        Millis(due.0 + (rotations - 1) * cycle)
    }

    fn start_autoplay(&mut self, index: usize, from: Millis) {
        self.cancel_timers();
        self.state = CarouselState::AutoPlaying { index };
        self.advance.schedule(from + self.slide_duration(index));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/machine.rs"]
mod tests;
