//! TimelineIndex: authoritative event set and year-window visibility queries.

use std::collections::HashMap;

use crate::config::TimelineConfig;
use crate::error::TimelineError;
use crate::event::Event;

/// Read-only event set, sorted by `(year, id)` at construction.
///
/// Queries are answered with a binary-searched year range followed by a
/// distance sort, so results are identical to a full linear scan regardless
/// of the order the events were supplied in.
#[derive(Debug, Clone)]
pub struct TimelineIndex {
    cfg: TimelineConfig,
    events: Vec<Event>,
    by_id: HashMap<String, usize>,
}

impl TimelineIndex {
    /// Build an index with the default configuration.
    pub fn new(events: Vec<Event>) -> Result<Self, TimelineError> {
        Self::with_config(events, TimelineConfig::default())
    }

    /// Build an index, validating every event and id uniqueness.
    pub fn with_config(mut events: Vec<Event>, cfg: TimelineConfig) -> Result<Self, TimelineError> {
        for ev in &events {
            ev.validate()?;
        }
        events.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.id.cmp(&b.id)));

        let mut by_id = HashMap::with_capacity(events.len());
        for (idx, ev) in events.iter().enumerate() {
            if by_id.insert(ev.id.clone(), idx).is_some() {
                return Err(TimelineError::invalid(format!("duplicate event id '{}'", ev.id)));
            }
        }
        log::debug!("timeline index built with {} events", events.len());

        Ok(Self { cfg, events, by_id })
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.cfg
    }

    pub fn default_window(&self) -> u32 {
        self.cfg.default_window
    }

    /// All events in `(year, id)` order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest and latest event years, if any.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        Some((self.events.first()?.year, self.events.last()?.year))
    }

    /// Every event with `|event.year - year| <= window`, nearest first.
    ///
    /// Equal distances are ordered by ascending year (the earlier event first),
    /// then by id.
    pub fn visible_events(&self, year: i32, window: u32) -> Vec<&Event> {
        let lo = i64::from(year) - i64::from(window);
        let hi = i64::from(year) + i64::from(window);
        let start = self.events.partition_point(|e| i64::from(e.year) < lo);
        let end = self.events.partition_point(|e| i64::from(e.year) <= hi);

        let mut hits: Vec<&Event> = self.events[start..end].iter().collect();
        hits.sort_by(|a, b| {
            a.distance_to(year)
                .cmp(&b.distance_to(year))
                .then_with(|| a.year.cmp(&b.year))
                .then_with(|| a.id.cmp(&b.id))
        });
        hits
    }

    /// [`visible_events`](Self::visible_events) with the configured default window.
    pub fn visible_events_default(&self, year: i32) -> Vec<&Event> {
        self.visible_events(year, self.cfg.default_window)
    }

    pub fn find_by_id(&self, id: &str) -> Result<&Event, TimelineError> {
        self.by_id
            .get(id)
            .map(|&idx| &self.events[idx])
            .ok_or_else(|| TimelineError::NotFound { id: id.to_string() })
    }
}
