//! Static event datasets.
//!
//! Two JSON shapes are accepted:
//! - a flat array of event records (`id,title,year,month?,lat?,lon?,era?,summary,detail|long`)
//! - a text-only map `{"<year>": ["title", ...]}` whose entries become
//!   location-less events with ids `"<year>-<n>"` (1-based).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::TimelineError;
use crate::event::{Event, GeoPoint};

#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    title: String,
    year: i32,
    #[serde(default)]
    month: Option<u8>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    era: Option<String>,
    #[serde(default)]
    summary: String,
    #[serde(default, alias = "long")]
    detail: String,
}

impl RawEvent {
    fn into_event(self) -> Result<Event, TimelineError> {
        let location = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            (None, None) => None,
            _ => {
                return Err(TimelineError::invalid(format!(
                    "event '{}' has only one of lat/lon",
                    self.id
                )))
            }
        };
        let ev = Event {
            id: self.id,
            title: self.title,
            year: self.year,
            month: self.month,
            location,
            era: self.era,
            summary: self.summary,
            detail: self.detail,
        };
        ev.validate()?;
        Ok(ev)
    }
}

/// Parse a JSON array of event records.
pub fn parse_events_json(s: &str) -> Result<Vec<Event>, TimelineError> {
    let raw: Vec<RawEvent> = serde_json::from_str(s)?;
    raw.into_iter().map(RawEvent::into_event).collect()
}

/// Parse a text-only `{"<year>": ["title", ...]}` map.
pub fn parse_text_only_json(s: &str) -> Result<Vec<Event>, TimelineError> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(s)?;
    let mut out = Vec::new();
    for (key, titles) in raw {
        let year: i32 = key
            .trim()
            .parse()
            .map_err(|_| TimelineError::invalid(format!("'{key}' is not a year")))?;
        for (n, title) in titles.into_iter().enumerate() {
            out.push(Event::new(format!("{year}-{}", n + 1), title, year));
        }
    }
    Ok(out)
}

/// Datasets bundled with the globe demo pages.
pub mod builtin {
    use crate::event::Event;

    /// Located events from the hologram globe variant.
    pub fn cyberpunk() -> Vec<Event> {
        vec![
            Event::new("giza", "Great Pyramid Completion", -2560)
                .with_month(7)
                .with_location(29.9792, 31.1342)
                .with_era("Ancient")
                .with_text(
                    "Khufu's pyramid - monumental architecture of Egypt.",
                    "The Great Pyramid of Giza, a feat of engineering, symbolized the pharaonic power and religious devotion of ancient Egypt.",
                ),
            Event::new("thermo", "Battle of Thermopylae", -480)
                .with_month(8)
                .with_location(38.797, 22.536)
                .with_era("Ancient")
                .with_text(
                    "300 Spartans vs Persian forces.",
                    "A legendary last stand that shaped Greek identity and resistance.",
                ),
            Event::new("const", "Fall of Constantinople", 1453)
                .with_month(5)
                .with_location(41.0082, 28.9784)
                .with_era("Medieval")
                .with_text(
                    "Ottoman conquest ends Byzantine rule.",
                    "The capture of Constantinople shifted trade routes and influenced the Age of Exploration.",
                ),
            Event::new("mag", "Magellan Sets Sail", 1519)
                .with_month(9)
                .with_location(38.7223, -9.1393)
                .with_era("Early Modern")
                .with_text(
                    "Beginning of the first circumnavigation.",
                    "Ferdinand Magellan's voyage proved the world was round and connected global navigation.",
                ),
            Event::new("ind", "Industrial Revolution", 1760)
                .with_month(1)
                .with_location(53.4808, -2.2426)
                .with_era("Modern")
                .with_text(
                    "Mechanized production spreads across Britain.",
                    "A shift from agrarian economies to industrial manufacturing, altering society, work and urban life.",
                ),
        ]
    }

    /// Text-only events from the basic variant.
    pub fn basic() -> Vec<Event> {
        [
            (-3000, "Development of ancient writing systems begins"),
            (44, "Assassination of Julius Caesar"),
            (476, "Fall of the Western Roman Empire"),
            (1492, "Columbus reaches the Americas"),
            (1776, "American Declaration of Independence"),
            (1914, "Start of World War 1"),
            (1939, "Start of World War 2"),
            (1969, "Moon Landing"),
            (1991, "Internet becomes public"),
            (2007, "First iPhone released"),
        ]
        .into_iter()
        .map(|(year, title)| Event::new(format!("{year}-1"), title, year))
        .collect()
    }
}
