use super::*;
use pretty_assertions::assert_eq;

fn plain() -> SlideTiming {
    SlideTiming::default()
}

fn with_video(secs: f64) -> SlideTiming {
    SlideTiming {
        has_background_video: true,
        video_duration: Millis::from_secs_f64(secs),
        video_url: None,
    }
}

fn with_link(url: &str) -> SlideTiming {
    SlideTiming {
        video_url: Some(url.to_owned()),
        ..SlideTiming::default()
    }
}

fn carousel(slides: Vec<SlideTiming>) -> HeroCarousel {
    HeroCarousel::new(slides, CarouselOpts::default(), Millis::ZERO)
}

#[test]
fn initial_state_depends_on_slide_count() {
    assert_eq!(carousel(vec![]).state(), &CarouselState::Empty);
    assert_eq!(carousel(vec![plain()]).state(), &CarouselState::Idle { index: 0 });
    assert_eq!(
        carousel(vec![plain(), plain()]).state(),
        &CarouselState::AutoPlaying { index: 0 }
    );
}

#[test]
fn single_slide_never_advances() {
    let mut c = carousel(vec![plain()]);
    assert_eq!(c.next_deadline(), None);
    assert!(c.tick(Millis(60_000)).is_empty());
    assert!(!c.next(Millis(1)));
    assert_eq!(c.index(), Some(0));
}

#[test]
fn slide_duration_uses_declared_video_length_only_with_background_video() {
    let c = carousel(vec![
        plain(),
        with_video(8.0),
        SlideTiming {
            has_background_video: false,
            video_duration: Some(Millis(9000)),
            video_url: None,
        },
        SlideTiming {
            has_background_video: true,
            video_duration: None,
            video_url: None,
        },
    ]);
    assert_eq!(c.slide_duration(0), Millis(5000));
    assert_eq!(c.slide_duration(1), Millis(8000));
    assert_eq!(c.slide_duration(2), Millis(5000));
    assert_eq!(c.slide_duration(3), Millis(5000));
}

#[test]
fn default_then_video_duration_scenario() {
    let mut c = carousel(vec![plain(), with_video(8.0), plain()]);

    assert!(c.tick(Millis(4999)).is_empty());
    assert_eq!(
        c.tick(Millis(5000)),
        vec![CarouselEvent::Advanced {
            from: 0,
            to: 1,
            at: Millis(5000)
        }]
    );
    assert_eq!(c.next_deadline(), Some(Millis(13_000)));

    assert!(c.tick(Millis(12_999)).is_empty());
    c.tick(Millis(13_000));
    assert_eq!(c.state(), &CarouselState::AutoPlaying { index: 2 });
}

#[test]
fn late_tick_replays_every_missed_advance() {
    let mut c = carousel(vec![plain(), plain(), plain()]);
    let events = c.tick(Millis(20_000));
    let at: Vec<u64> = events
        .iter()
        .map(|e| match e {
            CarouselEvent::Advanced { at, .. } => at.0,
            CarouselEvent::Resumed { at, .. } => at.0,
        })
        .collect();
    assert_eq!(at, vec![5000, 10_000, 15_000, 20_000]);
    assert_eq!(c.index(), Some(1));
    assert_eq!(c.next_deadline(), Some(Millis(25_000)));
}

#[test]
fn manual_navigation_pauses_for_resume_delay() {
    let mut c = carousel(vec![plain(), with_video(8.0), plain()]);
    assert!(c.next(Millis(2000)));
    assert_eq!(
        c.state(),
        &CarouselState::Paused {
            index: 1,
            resume_at: Millis(12_000)
        }
    );
    assert_eq!(c.next_deadline(), Some(Millis(12_000)));

    // The original 5000 ms advance was cancelled.
    assert!(c.tick(Millis(11_999)).is_empty());
    assert_eq!(c.index(), Some(1));

    assert_eq!(
        c.tick(Millis(12_000)),
        vec![CarouselEvent::Resumed {
            index: 1,
            at: Millis(12_000)
        }]
    );
    assert_eq!(c.state(), &CarouselState::AutoPlaying { index: 1 });
    assert_eq!(c.next_deadline(), Some(Millis(20_000)));
}

#[test]
fn repeated_navigation_restarts_resume_delay() {
    let mut c = carousel(vec![plain(), plain(), plain()]);
    c.next(Millis(1000));
    c.go_to(0, Millis(4000));
    assert!(c.tick(Millis(11_000)).is_empty());
    assert_eq!(c.next_deadline(), Some(Millis(14_000)));
}

#[test]
fn prev_wraps_and_go_to_rejects_out_of_range() {
    let mut c = carousel(vec![plain(), plain(), plain()]);
    assert!(c.prev(Millis(0)));
    assert_eq!(c.index(), Some(2));
    assert!(!c.go_to(3, Millis(0)));
    assert_eq!(c.index(), Some(2));
}

#[test]
fn embeddable_link_opens_overlay_and_close_resumes_immediately() {
    let mut c = carousel(vec![
        with_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        plain(),
    ]);
    let action = c.open_video(Millis(1000));
    assert_eq!(
        action,
        VideoAction::Overlay {
            video_id: "dQw4w9WgXcQ".into(),
            embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0".into(),
        }
    );
    assert_eq!(c.next_deadline(), None);
    assert_eq!(c.view().overlay.as_deref(), Some("dQw4w9WgXcQ"));

    assert!(c.close_video(Millis(30_000)));
    assert_eq!(c.state(), &CarouselState::AutoPlaying { index: 0 });
    assert_eq!(c.next_deadline(), Some(Millis(35_000)));
}

#[test]
fn navigation_closes_open_overlay() {
    let mut c = carousel(vec![with_link("https://youtu.be/dQw4w9WgXcQ"), plain()]);
    c.open_video(Millis(0));
    assert!(c.next(Millis(100)));
    assert_eq!(c.view(), CarouselView { index: 1, overlay: None });
}

#[test]
fn unrecognized_link_opens_externally_and_stays_paused() {
    let mut c = carousel(vec![with_link("https://vimeo.com/12345"), plain()]);
    assert_eq!(
        c.open_video(Millis(500)),
        VideoAction::OpenExternal {
            url: "https://vimeo.com/12345".into()
        }
    );
    assert!(matches!(c.state(), CarouselState::Paused { index: 0, .. }));
    assert!(!c.close_video(Millis(600)));
}

#[test]
fn slide_without_link_has_no_video_action() {
    let mut c = carousel(vec![plain(), plain()]);
    assert_eq!(c.open_video(Millis(0)), VideoAction::Unavailable);
    assert_eq!(c.state(), &CarouselState::AutoPlaying { index: 0 });
}

#[test]
fn dispose_clears_timers_and_ignores_later_input() {
    let mut c = carousel(vec![plain(), plain()]);
    c.dispose();
    assert_eq!(c.next_deadline(), None);
    assert!(c.tick(Millis(100_000)).is_empty());
    assert!(!c.next(Millis(1)));
    assert_eq!(c.open_video(Millis(1)), VideoAction::Unavailable);
    assert_eq!(c.state(), &CarouselState::Disposed);
}

#[test]
fn from_payload_skips_inactive_slides() {
    let payload: HeroPayload = serde_json::from_value(serde_json::json!({
        "slides": [
            {"title": "A"},
            {"title": "B", "isActive": false},
            {"title": "C", "backgroundVideo": "v.mp4", "videoDuration": "12.5"}
        ]
    }))
    .unwrap();
    let c = HeroCarousel::from_payload(&payload, CarouselOpts::default(), Millis::ZERO);
    assert_eq!(c.len(), 2);
    assert_eq!(c.slide_duration(1), Millis(12_500));
}

#[test]
fn zero_length_slides_are_floored_to_one_millisecond() {
    let opts = CarouselOpts {
        default_slide: Millis::ZERO,
        ..CarouselOpts::default()
    };
    let mut c = HeroCarousel::new(vec![plain(), plain()], opts, Millis::ZERO);
    assert_eq!(c.slide_duration(0), Millis(1));

    assert_eq!(
        c.tick(Millis(1)),
        vec![CarouselEvent::Advanced {
            from: 0,
            to: 1,
            at: Millis(1)
        }]
    );
    assert_eq!(c.next_deadline(), Some(Millis(2)));
}

#[test]
fn far_behind_clock_skips_whole_rotations() {
    let opts = CarouselOpts {
        default_slide: Millis::ZERO,
        ..CarouselOpts::default()
    };
    let mut c = HeroCarousel::new(vec![plain(), plain()], opts, Millis::ZERO);
    c.tick(Millis(1));

    let events = c.tick(Millis(10));
    assert_eq!(events.len(), 3);
    assert_eq!(
        events.last(),
        Some(&CarouselEvent::Advanced {
            from: 1,
            to: 0,
            at: Millis(10)
        })
    );
    assert_eq!(c.index(), Some(0));
    assert_eq!(c.next_deadline(), Some(Millis(11)));
}

#[test]
fn saturated_clock_returns() {
    let mut c = carousel(vec![plain(), plain()]);
    let events = c.tick(Millis(u64::MAX));
    assert!(!events.is_empty() && events.len() <= 4, "{events:?}");
    assert_eq!(c.next_deadline(), Some(Millis(u64::MAX)));
    assert_eq!(c.tick(Millis(u64::MAX)).len(), 1);
}

proptest::proptest! {
    #[test]
    fn one_slide_duration_advances_exactly_one(
        n in 2usize..8,
        secs in proptest::option::of(1u32..30),
    ) {
        let mut slides = vec![plain(); n];
        if let Some(s) = secs {
            slides[0] = with_video(f64::from(s));
        }
        let mut c = carousel(slides);
        let d = c.slide_duration(0);
        c.tick(d.saturating_sub(Millis(1)));
        proptest::prop_assert_eq!(c.index(), Some(0));
        c.tick(d);
        proptest::prop_assert_eq!(c.index(), Some(1));
    }
}
