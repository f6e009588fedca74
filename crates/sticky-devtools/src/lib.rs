//! Debug overlay for [`HeaderDecoration`]s.
//!
//! Outlines every header hit target from the last sticky pass, tinted by the
//! state its id is in, and prints a one-line summary in the corner.

use web_time::Instant;

use sticky_core::{Color, Rect, Scene, SceneNode};
use sticky_headers::{HeaderAdapter, HeaderDecoration, HeaderState};

const STACKED: &str = "#FF8844";
const INLINE: &str = "#44AAFF";
const UNKNOWN: &str = "#AAAAAA";
const HOVER: &str = "#FFFF44";

#[derive(Clone, Debug, Default)]
pub struct PassStats {
    pub draw_ms: f32,
    pub headers: usize,
    pub scene_nodes: usize,
}

pub struct HeaderInspector {
    pub enabled: bool,
    /// Position whose header should be highlighted.
    pub hovered: Option<usize>,
    frame_count: u64,
    pub stats: Option<PassStats>,
}

impl Default for HeaderInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderInspector {
    pub fn new() -> Self {
        Self {
            enabled: false,
            hovered: None,
            frame_count: 0,
            stats: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!("header inspector enabled: {}", self.enabled);
    }

    pub fn set_hovered(&mut self, position: Option<usize>) {
        self.hovered = position;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Runs one draw pass and keeps its timing for the summary line.
    pub fn time_pass<R>(&mut self, pass: impl FnOnce() -> R) -> R {
        let start = Instant::now();
        let out = pass();
        self.stats = Some(PassStats {
            draw_ms: start.elapsed().as_secs_f32() * 1000.0,
            ..PassStats::default()
        });
        out
    }

    pub fn overlay<A: HeaderAdapter>(&mut self, headers: &HeaderDecoration<A>, scene: &mut Scene) {
        if !self.enabled {
            return;
        }
        self.frame_count += 1;
        let nodes_before = scene.nodes.len();

        let adapter = headers.adapter();
        let count = adapter.item_count();
        for (position, rect) in headers.header_rects().iter() {
            let state = if position < count {
                headers.header_state(adapter.header_id(position))
            } else {
                None
            };
            let hovered = self.hovered == Some(position);
            let color = if hovered {
                Color::from_hex(HOVER)
            } else {
                tint(state)
            };
            scene.nodes.push(SceneNode::Border {
                rect,
                color,
                width: if hovered { 3.0 } else { 1.0 },
                radius: 0.0,
            });
            scene.nodes.push(SceneNode::Text {
                rect: Rect::new(rect.x + 4.0, rect.y + 4.0, (rect.w - 8.0).max(0.0), 14.0),
                text: format!("#{position} {}", label(state)),
                color,
                size: 12.0,
            });
        }

        let mut line = vec![
            format!("frame: {}", self.frame_count),
            format!("headers: {}", headers.header_rects().len()),
        ];
        if let Some(stats) = &mut self.stats {
            stats.headers = headers.header_rects().len();
            stats.scene_nodes = nodes_before;
            line.push(format!("draw: {:.2} ms", stats.draw_ms));
            line.push(format!("nodes: {}", stats.scene_nodes));
        }
        scene.nodes.push(SceneNode::Text {
            rect: Rect::new(8.0, 8.0, 240.0, 16.0),
            text: line.join("  |  "),
            color: Color::from_hex(UNKNOWN),
            size: 14.0,
        });
    }
}

fn tint(state: Option<HeaderState>) -> Color {
    match state {
        Some(HeaderState::Stacked) => Color::from_hex(STACKED),
        Some(HeaderState::Inline) => Color::from_hex(INLINE),
        None => Color::from_hex(UNKNOWN),
    }
}

fn label(state: Option<HeaderState>) -> &'static str {
    match state {
        Some(HeaderState::Stacked) => "stacked",
        Some(HeaderState::Inline) => "inline",
        None => "?",
    }
}
