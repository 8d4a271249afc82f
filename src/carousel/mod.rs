//! Hero Carousel State Machine: active slide, per-slide autoplay timing, pause/resume after
//! manual navigation, and the video overlay lifecycle. Driven entirely by caller-supplied time.

pub(crate) mod machine;
pub(crate) mod timer;
