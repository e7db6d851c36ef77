use serde_json::to_string_pretty;
use timewarp_session::{Marker, Renderer, Session, SessionConfig};
use timewarp_timeline_core::builtin;

/// Prints renderer calls instead of drawing.
#[derive(Default)]
struct ConsoleRenderer {
    last_markers: usize,
}

impl Renderer for ConsoleRenderer {
    fn set_rotation(&mut self, _angle: f32) {}

    fn set_markers(&mut self, markers: &[Marker]) {
        if markers.len() != self.last_markers {
            println!("markers: {:?}", markers.iter().map(|m| &m.event_id).collect::<Vec<_>>());
            self.last_markers = markers.len();
        }
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        println!("orbit controls {}", if enabled { "on" } else { "off" });
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let year: i32 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(-480);

    let mut session = Session::from_events(
        builtin::cyberpunk(),
        SessionConfig::default(),
        ConsoleRenderer::default(),
    )?;

    session.set_slider_year(year);
    let plan = session.press_travel()?;
    println!("travel plan:\n{}", to_string_pretty(&plan)?);

    loop {
        let report = session.frame(1.0 / 60.0)?;
        if report.tick.is_settled() {
            println!("settled on frame {}:\n{}", report.index, to_string_pretty(&report)?);
            break;
        }
    }

    println!("panel:\n{}", to_string_pretty(session.panel())?);
    Ok(())
}
