//! TransitionController: `Idle -> Traveling -> Idle` with an eased spin.
//!
//! Methods:
//! - new / with_overshoot (constructor-injected presenter and randomness)
//! - request_travel (Idle only; Busy otherwise)
//! - tick (advance elapsed, emit angle, settle + notify on completion)

use std::sync::Arc;

use rand::rngs::SmallRng;
use timewarp_timeline_core::TimelineIndex;

use crate::config::TravelConfig;
use crate::easing::{ease_out_cubic, lerp_f32};
use crate::error::TravelError;
use crate::outputs::{TickOutput, TravelPlan};
use crate::overshoot::{OvershootSource, RngOvershoot};
use crate::presenter::Presenter;
use crate::state::{TravelPhase, TravelState};

#[derive(Debug)]
pub struct TransitionController<P, O = RngOvershoot<SmallRng>> {
    cfg: TravelConfig,
    index: Arc<TimelineIndex>,
    state: TravelState,
    presenter: P,
    overshoot: O,
}

impl<P: Presenter> TransitionController<P> {
    /// Controller seeded from OS randomness.
    pub fn new(
        index: Arc<TimelineIndex>,
        cfg: TravelConfig,
        presenter: P,
    ) -> Result<Self, TravelError> {
        Self::with_overshoot(index, cfg, presenter, RngOvershoot::from_os_rng())
    }
}

impl<P: Presenter, O: OvershootSource> TransitionController<P, O> {
    pub fn with_overshoot(
        index: Arc<TimelineIndex>,
        cfg: TravelConfig,
        presenter: P,
        overshoot: O,
    ) -> Result<Self, TravelError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            index,
            state: TravelState::default(),
            presenter,
            overshoot,
        })
    }

    pub fn config(&self) -> &TravelConfig {
        &self.cfg
    }

    pub fn index(&self) -> &Arc<TimelineIndex> {
        &self.index
    }

    pub fn state(&self) -> &TravelState {
        &self.state
    }

    pub fn phase(&self) -> TravelPhase {
        self.state.phase
    }

    pub fn is_traveling(&self) -> bool {
        self.state.phase.is_traveling()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Window used when the transition settles.
    pub fn window(&self) -> u32 {
        self.cfg.window.unwrap_or_else(|| self.index.default_window())
    }

    /// Normalized progress `[0,1]` of the in-flight transition; `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.is_traveling()
            .then(|| (self.state.elapsed / self.cfg.duration_s()).clamp(0.0, 1.0))
    }

    /// Start a transition toward `target_year` from the renderer's current angle.
    ///
    /// Any year is accepted; an empty result on settle is valid.
    pub fn request_travel(
        &mut self,
        target_year: i32,
        current_angle: f32,
    ) -> Result<TravelPlan, TravelError> {
        if self.state.phase.is_traveling() {
            log::warn!(
                "travel to {target_year} ignored: already traveling to {}",
                self.state.target_year
            );
            return Err(TravelError::Busy {
                in_flight_year: self.state.target_year,
            });
        }
        if !current_angle.is_finite() {
            return Err(TravelError::InvalidInput {
                reason: format!("current angle must be finite, got {current_angle}"),
            });
        }

        let sample = self.overshoot.next_unit();
        let sample = if sample.is_finite() {
            sample.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let peak = current_angle + self.cfg.base_turns + sample * self.cfg.extra_turns;

        self.state = TravelState {
            phase: TravelPhase::Traveling,
            target_year,
            elapsed: 0.0,
            start_angle: current_angle,
            peak_angle: peak,
        };
        log::debug!(
            "travel to {target_year} accepted: {current_angle:.3} -> {peak:.3} rad over {}ms",
            self.cfg.duration_ms
        );

        Ok(TravelPlan {
            target_year,
            start_angle: current_angle,
            peak_angle: peak,
            duration_s: self.cfg.duration_s(),
        })
    }

    /// Advance the in-flight transition by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<TickOutput, TravelError> {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("tick rejected: dt = {dt}");
            return Err(TravelError::InvalidInput {
                reason: format!("dt must be finite and >= 0, got {dt}"),
            });
        }
        if !self.state.phase.is_traveling() {
            return Ok(TickOutput::Idle);
        }

        self.state.elapsed += dt;
        let u = (self.state.elapsed / self.cfg.duration_s()).clamp(0.0, 1.0);
        let angle = lerp_f32(self.state.start_angle, self.state.peak_angle, ease_out_cubic(u));
        if u < 1.0 {
            return Ok(TickOutput::Traveling {
                rotation_angle: angle,
                progress: u,
            });
        }

        self.state.phase = TravelPhase::Idle;
        let target_year = self.state.target_year;
        let window = self.cfg.window.unwrap_or_else(|| self.index.default_window());
        let hits = self.index.visible_events(target_year, window);
        log::debug!("travel to {target_year} settled with {} events", hits.len());

        self.presenter.on_transition_settled(target_year, &hits);
        let auto_opened = match hits.as_slice() {
            [only] => {
                self.presenter.on_auto_open_detail(only);
                Some(only.id.clone())
            }
            _ => None,
        };

        Ok(TickOutput::Settled {
            rotation_angle: angle,
            target_year,
            visible: hits.iter().map(|e| e.id.clone()).collect(),
            auto_opened,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overshoot::FixedOvershoot;
    use crate::presenter::NullPresenter;
    use timewarp_timeline_core::Event;

    fn controller(duration_ms: u32) -> TransitionController<NullPresenter, FixedOvershoot> {
        let index = Arc::new(TimelineIndex::new(vec![Event::new("a", "A", 0)]).unwrap());
        let cfg = TravelConfig {
            duration_ms,
            base_turns: 4.0,
            extra_turns: 6.0,
            window: None,
        };
        TransitionController::with_overshoot(index, cfg, NullPresenter, FixedOvershoot(0.5)).unwrap()
    }

    #[test]
    fn peak_uses_base_plus_scaled_overshoot() {
        let mut c = controller(1000);
        let plan = c.request_travel(0, 1.0).unwrap();
        assert_eq!(plan.start_angle, 1.0);
        assert_eq!(plan.peak_angle, 1.0 + 4.0 + 3.0);
        assert_eq!(c.phase(), TravelPhase::Traveling);
        assert_eq!(c.progress(), Some(0.0));
    }

    #[test]
    fn out_of_range_samples_are_clamped() {
        let index = Arc::new(TimelineIndex::new(Vec::new()).unwrap());
        let mut c = TransitionController::with_overshoot(
            index,
            TravelConfig::default(),
            NullPresenter,
            FixedOvershoot(f32::NAN),
        )
        .unwrap();
        let plan = c.request_travel(0, 0.0).unwrap();
        assert_eq!(plan.peak_angle, TravelConfig::default().base_turns);
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut c = controller(1000);
        assert_eq!(c.tick(0.5).unwrap(), TickOutput::Idle);
        assert_eq!(c.state(), &TravelState::default());
    }

    #[test]
    fn negative_and_nan_dt_are_rejected() {
        let mut c = controller(1000);
        c.request_travel(0, 0.0).unwrap();
        assert!(matches!(c.tick(-0.01), Err(TravelError::InvalidInput { .. })));
        assert!(matches!(c.tick(f32::NAN), Err(TravelError::InvalidInput { .. })));
        assert_eq!(c.state().elapsed, 0.0);
    }

    #[test]
    fn non_finite_angle_is_rejected() {
        let mut c = controller(1000);
        assert!(matches!(
            c.request_travel(0, f32::INFINITY),
            Err(TravelError::InvalidInput { .. })
        ));
        assert_eq!(c.phase(), TravelPhase::Idle);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let index = Arc::new(TimelineIndex::new(Vec::new()).unwrap());
        let cfg = TravelConfig {
            duration_ms: 0,
            ..TravelConfig::default()
        };
        let err = TransitionController::with_overshoot(index, cfg, NullPresenter, FixedOvershoot(0.0))
            .unwrap_err();
        assert!(matches!(err, TravelError::InvalidConfig { .. }));
    }
}
