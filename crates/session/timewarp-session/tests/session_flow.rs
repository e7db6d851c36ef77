use std::f32::consts::TAU;
use std::sync::Arc;

use approx::assert_abs_diff_eq;
use timewarp_session::{
    InfoPanel, Marker, Renderer, Session, SessionConfig, SessionError, NO_EVENTS_MESSAGE,
};
use timewarp_test_fixtures::{configs, events};
use timewarp_timeline_core::{parse_events_json, TimelineIndex};
use timewarp_travel_core::{FixedOvershoot, TickOutput, TravelError, TravelPhase};

#[derive(Debug, Default)]
struct RecordingRenderer {
    rotations: Vec<f32>,
    markers: Vec<Vec<String>>,
    interaction: Vec<bool>,
}

impl Renderer for RecordingRenderer {
    fn set_rotation(&mut self, angle: f32) {
        self.rotations.push(angle);
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        self.markers
            .push(markers.iter().map(|m| m.event_id.clone()).collect());
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction.push(enabled);
    }
}

fn session() -> Session<RecordingRenderer, FixedOvershoot> {
    let evs = parse_events_json(&events::json("cyberpunk").unwrap()).unwrap();
    let index = Arc::new(TimelineIndex::new(evs).unwrap());
    let mut cfg = SessionConfig::default();
    cfg.travel.duration_ms = 1000;
    Session::with_overshoot(index, cfg, RecordingRenderer::default(), FixedOvershoot(0.5)).unwrap()
}

fn marker_ids(s: &Session<RecordingRenderer, FixedOvershoot>) -> Vec<String> {
    s.markers().iter().map(|m| m.event_id.clone()).collect()
}

fn settle(s: &mut Session<RecordingRenderer, FixedOvershoot>) {
    for _ in 0..100 {
        if s.frame(0.25).unwrap().tick.is_settled() {
            return;
        }
    }
    panic!("travel never settled");
}

#[test]
fn starts_with_markers_for_initial_year() {
    let s = session();
    assert_eq!(s.slider_year(), 1453);
    assert_eq!(marker_ids(&s), ["const"]);
    assert_eq!(s.renderer().markers.last().unwrap(), &["const".to_string()]);
    assert_eq!(s.renderer().interaction, [true]);
    assert_eq!(s.travel_button().label, "TIME TRAVEL");
}

#[test]
fn slider_updates_markers_live_and_clamps() {
    let mut s = session();
    assert_eq!(s.set_slider_year(-480), -480);
    assert_eq!(marker_ids(&s), ["thermo"]);
    assert_eq!(s.set_slider_year(-10_000), -3000);
    assert!(s.markers().is_empty());
    assert_eq!(s.show_year(1510), ["mag"]);
}

#[test]
fn travel_settles_and_auto_opens_single_event() {
    let mut s = session();
    s.set_slider_year(-480);
    s.press_travel().unwrap();

    let button = s.travel_button();
    assert_eq!(button.label, "WARPING...");
    assert!(!button.enabled);
    assert_eq!(s.renderer().interaction.last(), Some(&false));

    settle(&mut s);

    assert_eq!(s.phase(), TravelPhase::Idle);
    assert!(s.travel_button().enabled);
    assert_eq!(s.renderer().interaction.last(), Some(&true));
    let panel: &InfoPanel = s.panel();
    assert!(panel.visible);
    assert_eq!(panel.event_id.as_deref(), Some("thermo"));
    assert_eq!(panel.meta, "480 BCE • 38.80°, 22.54°");
    let results = panel.results.as_ref().unwrap();
    assert_eq!(results.heading, "480 BCE");
    assert_eq!(results.titles, ["Battle of Thermopylae"]);
}

#[test]
fn second_press_while_warping_is_busy() {
    let mut s = session();
    let plan = s.press_travel().unwrap();
    s.frame(0.25).unwrap();

    match s.press_travel() {
        Err(SessionError::Travel(TravelError::Busy { in_flight_year })) => {
            assert_eq!(in_flight_year, plan.target_year)
        }
        other => panic!("expected busy, got {other:?}"),
    }
}

#[test]
fn slider_moves_during_travel_do_not_retarget() {
    let mut s = session();
    s.set_slider_year(1519);
    s.press_travel().unwrap();
    s.frame(0.25).unwrap();

    s.set_slider_year(-2560);
    assert_eq!(marker_ids(&s), ["mag"]);

    settle(&mut s);
    assert_eq!(s.slider_year(), -2560);
    assert_eq!(marker_ids(&s), ["mag"]);
    assert_eq!(s.panel().event_id.as_deref(), Some("mag"));
}

#[test]
fn empty_year_shows_no_events_message() {
    let mut s = session();
    s.set_slider_year(0);
    s.press_travel().unwrap();
    settle(&mut s);

    let panel = s.panel();
    assert!(!panel.visible);
    let results = panel.results.as_ref().unwrap();
    assert!(results.titles.is_empty());
    assert_eq!(results.message.as_deref(), Some(NO_EVENTS_MESSAGE));
    assert!(s.markers().is_empty());
}

#[test]
fn rotation_tracks_travel_then_idles() {
    let mut s = session();
    let start = s.rotation();
    let plan = s.press_travel().unwrap();
    assert_eq!(plan.start_angle, start);

    let mut prev = start;
    for _ in 0..3 {
        let report = s.frame(0.25).unwrap();
        assert!(report.rotation >= prev);
        prev = report.rotation;
    }
    let settled = s.frame(0.25).unwrap();
    assert!(settled.tick.is_settled());
    assert_abs_diff_eq!(settled.rotation, plan.peak_angle.rem_euclid(TAU), epsilon = 1e-4);
    assert!((0.0..TAU).contains(&settled.rotation));

    let report = s.frame(0.5).unwrap();
    assert_abs_diff_eq!(
        report.rotation,
        (settled.rotation + 0.096 * 0.5).rem_euclid(TAU),
        epsilon = 1e-5
    );
    assert_eq!(report.index, 4);
    assert_eq!(s.renderer().rotations.last(), Some(&report.rotation));
}

#[test]
fn idle_spin_wraps_within_one_turn() {
    let mut cfg = SessionConfig::default();
    cfg.idle_spin_per_second = 3.0;
    let evs = parse_events_json(&events::json("cyberpunk").unwrap()).unwrap();
    let mut s = Session::from_events(evs, cfg, RecordingRenderer::default()).unwrap();

    for _ in 0..600 {
        let report = s.frame(1.0 / 60.0).unwrap();
        assert!((0.0..TAU).contains(&report.rotation));
    }
}

#[test]
fn travel_window_override_drives_markers_and_results() {
    let evs = parse_events_json(&events::json("cyberpunk").unwrap()).unwrap();
    let index = Arc::new(TimelineIndex::new(evs).unwrap());
    let mut cfg = SessionConfig::default();
    cfg.travel.duration_ms = 1000;
    cfg.travel.window = Some(100);
    let mut s =
        Session::with_overshoot(index, cfg, RecordingRenderer::default(), FixedOvershoot(0.5))
            .unwrap();

    assert_eq!(s.show_year(1490), ["mag", "const"]);
    s.press_travel().unwrap();

    let visible = loop {
        if let TickOutput::Settled { visible, .. } = s.frame(0.25).unwrap().tick {
            break visible;
        }
    };
    assert_eq!(visible, ["mag", "const"]);
    assert_eq!(marker_ids(&s), visible);
    assert_eq!(
        s.panel().results.as_ref().unwrap().titles,
        ["Magellan Sets Sail", "Fall of Constantinople"]
    );
    assert!(!s.panel().visible);
}

#[test]
fn negative_dt_is_rejected() {
    let mut s = session();
    assert!(matches!(
        s.frame(-1.0),
        Err(SessionError::Travel(TravelError::InvalidInput { .. }))
    ));
}

#[test]
fn open_by_id_and_marker_picking() {
    let mut s = session();
    assert!(!s.open_event_by_id("atlantis"));
    assert_eq!(s.panel(), &InfoPanel::default());

    assert!(!s.select_marker("giza"));
    assert!(s.select_marker("const"));
    assert_eq!(s.panel().title, "Fall of Constantinople");

    s.close_info();
    assert!(!s.panel().visible);

    assert!(s.open_event_by_id("giza"));
    assert_eq!(s.panel().meta, "2560 BCE • 29.98°, 31.13°");
}

#[test]
fn session_config_fixture_round_trips_defaults() {
    let cfg = SessionConfig::from_json(&configs::json("session-default").unwrap()).unwrap();
    let loaded: SessionConfig = configs::load("session-default").unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(cfg.timeline.default_window, 15);
    assert_eq!(cfg.travel.duration_ms, 1200);
    assert_eq!(cfg.slider_min, -3000);
    assert_abs_diff_eq!(cfg.travel.base_turns, SessionConfig::default().travel.base_turns, epsilon = 1e-6);
}

#[test]
fn from_events_uses_timeline_config() {
    let evs = parse_events_json(&events::json("cyberpunk").unwrap()).unwrap();
    let mut cfg = SessionConfig::default();
    cfg.timeline.default_window = 100;
    let s = Session::from_events(evs, cfg, RecordingRenderer::default()).unwrap();
    let ids: Vec<String> = s.markers().iter().map(|m| m.event_id.clone()).collect();
    assert_eq!(ids, ["const", "mag"]);
}
