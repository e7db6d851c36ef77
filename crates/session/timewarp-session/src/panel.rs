//! Info panel model. Acts as the session's presenter.

use serde::{Deserialize, Serialize};
use timewarp_timeline_core::{format_year, Event};
use timewarp_travel_core::Presenter;

/// Shown when a settled travel finds nothing.
pub const NO_EVENTS_MESSAGE: &str = "No major events found.";

/// Result list shown after a travel settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub year: i32,
    pub heading: String,
    /// Event titles, nearest first. Empty when `message` is set.
    pub titles: Vec<String>,
    pub message: Option<String>,
}

/// Detail panel plus the latest settled result list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoPanel {
    pub visible: bool,
    pub event_id: Option<String>,
    pub title: String,
    pub meta: String,
    pub paragraphs: Vec<String>,
    pub results: Option<ResultsView>,
}

impl InfoPanel {
    pub fn open(&mut self, event: &Event) {
        self.visible = true;
        self.event_id = Some(event.id.clone());
        self.title = event.title.clone();
        self.meta = event.meta_line();
        self.paragraphs = [&event.summary, &event.detail]
            .into_iter()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
    }

    /// Hide the panel; its last content is kept.
    pub fn close(&mut self) {
        self.visible = false;
    }
}

impl Presenter for InfoPanel {
    fn on_transition_settled(&mut self, target_year: i32, events: &[&Event]) {
        let titles: Vec<String> = events.iter().map(|e| e.title.clone()).collect();
        let message = titles.is_empty().then(|| NO_EVENTS_MESSAGE.to_string());
        self.results = Some(ResultsView {
            year: target_year,
            heading: format_year(target_year),
            titles,
            message,
        });
    }

    fn on_auto_open_detail(&mut self, event: &Event) {
        self.open(event);
    }
}
