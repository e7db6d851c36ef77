//! Outbound callbacks into the presentation layer.

use timewarp_timeline_core::Event;

/// Receives the results of a settled transition.
pub trait Presenter {
    /// Called once per completed transition with the visible events,
    /// nearest first. An empty slice is a valid result.
    fn on_transition_settled(&mut self, target_year: i32, events: &[&Event]);

    /// Called after `on_transition_settled` when exactly one event matched.
    fn on_auto_open_detail(&mut self, event: &Event);
}

/// Presenter that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_transition_settled(&mut self, _target_year: i32, _events: &[&Event]) {}

    fn on_auto_open_detail(&mut self, _event: &Event) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn on_transition_settled(&mut self, target_year: i32, events: &[&Event]) {
        (**self).on_transition_settled(target_year, events);
    }

    fn on_auto_open_detail(&mut self, event: &Event) {
        (**self).on_auto_open_detail(event);
    }
}
