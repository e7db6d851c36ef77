//! Session: per-frame driver for slider, idle spin, travel and markers.
//!
//! Methods:
//! - new / with_overshoot
//! - set_slider_year, show_year (live marker refresh while idle)
//! - press_travel (Busy while a travel is in flight)
//! - frame (tick travel or idle spin → pulse markers → push to renderer)
//! - open_event_by_id, select_marker, close_info

use std::f32::consts::TAU;
use std::sync::Arc;

use rand::rngs::SmallRng;
use serde::Serialize;
use timewarp_timeline_core::{Event, TimelineIndex};
use timewarp_travel_core::{
    OvershootSource, RngOvershoot, TickOutput, TransitionController, TravelPhase, TravelPlan,
};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::markers::{apply_pulse, place_markers, Marker};
use crate::panel::InfoPanel;
use crate::renderer::Renderer;

const TRAVEL_LABEL: &str = "TIME TRAVEL";
const WARPING_LABEL: &str = "WARPING...";

/// Travel button presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// What happened during one `frame` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    /// 0-based frame index.
    pub index: u64,
    pub rotation: f32,
    pub phase: TravelPhase,
    pub tick: TickOutput,
}

pub struct Session<R, O = RngOvershoot<SmallRng>> {
    cfg: SessionConfig,
    index: Arc<TimelineIndex>,
    controller: TransitionController<InfoPanel, O>,
    renderer: R,
    slider_year: i32,
    rotation: f32,
    clock_s: f64,
    frame_index: u64,
    markers: Vec<Marker>,
}

impl<R: Renderer> Session<R> {
    pub fn new(
        index: Arc<TimelineIndex>,
        cfg: SessionConfig,
        renderer: R,
    ) -> Result<Self, SessionError> {
        Self::with_overshoot(index, cfg, renderer, RngOvershoot::from_os_rng())
    }

    /// Build the index from `events` using `cfg.timeline`.
    pub fn from_events(
        events: Vec<Event>,
        cfg: SessionConfig,
        renderer: R,
    ) -> Result<Self, SessionError> {
        let index = TimelineIndex::with_config(events, cfg.timeline.clone())?;
        Self::new(Arc::new(index), cfg, renderer)
    }
}

impl<R: Renderer, O: OvershootSource> Session<R, O> {
    pub fn with_overshoot(
        index: Arc<TimelineIndex>,
        cfg: SessionConfig,
        renderer: R,
        overshoot: O,
    ) -> Result<Self, SessionError> {
        cfg.validate()?;
        let controller = TransitionController::with_overshoot(
            index.clone(),
            cfg.travel.clone(),
            InfoPanel::default(),
            overshoot,
        )?;
        let slider_year = cfg.clamp_year(cfg.initial_year);
        let mut session = Self {
            cfg,
            index,
            controller,
            renderer,
            slider_year,
            // globe starts a quarter turn in so the seam faces away
            rotation: std::f32::consts::FRAC_PI_2,
            clock_s: 0.0,
            frame_index: 0,
            markers: Vec::new(),
        };
        session.refresh_markers(slider_year);
        session.renderer.set_rotation(session.rotation);
        session.renderer.set_interaction_enabled(true);
        log::debug!(
            "session ready: {} events, slider at {}",
            session.index.len(),
            session.slider_year
        );
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.cfg
    }

    pub fn index(&self) -> &Arc<TimelineIndex> {
        &self.index
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn panel(&self) -> &InfoPanel {
        self.controller.presenter()
    }

    pub fn phase(&self) -> TravelPhase {
        self.controller.phase()
    }

    pub fn slider_year(&self) -> i32 {
        self.slider_year
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn travel_button(&self) -> TravelButton {
        if self.controller.is_traveling() {
            TravelButton {
                label: WARPING_LABEL,
                enabled: false,
            }
        } else {
            TravelButton {
                label: TRAVEL_LABEL,
                enabled: true,
            }
        }
    }

    /// Slider drag. The year is clamped to the slider bounds. Markers follow
    /// the slider live while idle; during a travel the refresh is deferred
    /// until the transition settles on its own target year.
    pub fn set_slider_year(&mut self, year: i32) -> i32 {
        self.slider_year = self.cfg.clamp_year(year);
        if !self.controller.is_traveling() {
            self.refresh_markers(self.slider_year);
        }
        self.slider_year
    }

    /// Host API: jump the slider to `year` and return the ids now visible,
    /// using the same window a travel settles with.
    pub fn show_year(&mut self, year: i32) -> Vec<String> {
        let year = self.set_slider_year(year);
        self.index
            .visible_events(year, self.controller.window())
            .into_iter()
            .map(|e| e.id.clone())
            .collect()
    }

    /// Travel button click: travel to the current slider year.
    pub fn press_travel(&mut self) -> Result<TravelPlan, SessionError> {
        let plan = self
            .controller
            .request_travel(self.slider_year, self.rotation)?;
        self.renderer.set_interaction_enabled(false);
        Ok(plan)
    }

    /// Advance one frame by `dt` seconds and push the result to the renderer.
    pub fn frame(&mut self, dt: f32) -> Result<FrameReport, SessionError> {
        let tick = self.controller.tick(dt)?;
        match &tick {
            TickOutput::Idle => {
                let spun = self.rotation + self.cfg.idle_spin_per_second * dt;
                self.rotation = spun.rem_euclid(TAU);
            }
            TickOutput::Traveling { rotation_angle, .. } => {
                self.rotation = *rotation_angle;
            }
            TickOutput::Settled {
                rotation_angle,
                target_year,
                ..
            } => {
                self.rotation = rotation_angle.rem_euclid(TAU);
                self.refresh_markers(*target_year);
                self.renderer.set_interaction_enabled(true);
            }
        }

        self.clock_s += f64::from(dt);
        apply_pulse(&mut self.markers, self.clock_s);
        self.renderer.set_rotation(self.rotation);
        self.renderer.set_markers(&self.markers);

        let report = FrameReport {
            index: self.frame_index,
            rotation: self.rotation,
            phase: self.controller.phase(),
            tick,
        };
        self.frame_index += 1;
        Ok(report)
    }

    /// Host API: open the info panel for `id`. Unknown ids leave the panel
    /// untouched and return `false`.
    pub fn open_event_by_id(&mut self, id: &str) -> bool {
        match self.index.find_by_id(id) {
            Ok(ev) => {
                self.controller.presenter_mut().open(ev);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Renderer picking result: open the event behind a visible marker.
    pub fn select_marker(&mut self, event_id: &str) -> bool {
        if !self.markers.iter().any(|m| m.event_id == event_id) {
            log::debug!("pick on '{event_id}' ignored: no visible marker");
            return false;
        }
        self.open_event_by_id(event_id)
    }

    pub fn close_info(&mut self) {
        self.controller.presenter_mut().close();
    }

    /// Whether a travel request would currently be rejected.
    pub fn is_busy(&self) -> bool {
        self.controller.is_traveling()
    }

    fn refresh_markers(&mut self, year: i32) {
        let visible = self.index.visible_events(year, self.controller.window());
        let radius = self.cfg.globe_radius + self.cfg.marker_lift;
        self.markers = place_markers(&visible, radius);
        apply_pulse(&mut self.markers, self.clock_s);
        self.renderer.set_markers(&self.markers);
    }
}
