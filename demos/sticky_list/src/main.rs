use std::rc::Rc;

use sticky_core::*;
use sticky_devtools::HeaderInspector;
use sticky_headers::*;

const NAMES: &[&str] = &[
    "Aaliyah", "Abel", "Ada", "Alonzo", "Amara", "Bao", "Beatrix", "Bilal", "Carmen", "Cato",
    "Chidi", "Cyrus", "Dalia", "Dev", "Dorothea", "Eamon", "Elif", "Esther", "Farah", "Felix",
    "Gaspard", "Greta", "Hana", "Hugo", "Idris", "Ines", "Jonas", "Juno", "Kai", "Kenji", "Lena",
    "Luca", "Maeve", "Mateo", "Noor", "Oskar", "Priya", "Quentin", "Rosa", "Soren", "Tariq",
    "Uma", "Vera", "Wren", "Xiadani", "Yusuf", "Zara",
];

const ITEM_HEIGHT: f32 = 48.0;

struct ContactHeader {
    letter: char,
    view: View,
}

impl HeaderHolder for ContactHeader {
    fn view(&self) -> &View {
        &self.view
    }
}

struct Contacts {
    names: Vec<&'static str>,
}

impl Contacts {
    fn letter(&self, position: usize) -> Option<char> {
        self.names
            .get(position)
            .and_then(|n| n.chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

fn header_view(letter: char) -> View {
    Row(Modifier::new()
        .padding(8.0)
        .background(Color::from_hex("#1E1E1E"))
        .border(1.0, Color::from_hex("#333333"), 0.0))
    .child(
        Text(letter.to_string())
            .size(18.0)
            .color(Color::from_hex("#AAAAAA")),
    )
}

impl HeaderAdapter for Contacts {
    type Holder = ContactHeader;

    fn item_count(&self) -> usize {
        self.names.len()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.letter(position).map(|c| c as HeaderId).unwrap_or(-1)
    }

    fn create_header(&self, _list: &ListViewport, position: usize) -> ContactHeader {
        let letter = self.letter(position).unwrap_or('#');
        ContactHeader {
            letter,
            view: header_view(letter),
        }
    }

    fn bind_header(&self, holder: &mut ContactHeader, position: usize) {
        if let Some(letter) = self.letter(position) {
            holder.letter = letter;
            holder.view = header_view(letter);
        }
    }

    fn on_header_state_change(&self, holder: &ContactHeader, state: HeaderState, position: usize) {
        log::info!("section {} at {position} is now {state:?}", holder.letter);
    }
}

/// Item placement for a list that reserves header space through
/// `item_offsets`, scrolled by moving every child up.
struct SimulatedList {
    size: Size,
    tops: Vec<f32>,
    content_height: f32,
}

impl SimulatedList {
    fn layout<A: HeaderAdapter>(
        headers: &mut HeaderDecoration<A>,
        size: Size,
    ) -> Result<Self, DecorationError> {
        let probe = ListViewport::linear(Orientation::Vertical, size);
        let mut tops = Vec::new();
        let mut y = 0.0;
        for position in 0..headers.adapter().item_count() {
            let inset = headers.item_offsets(position, &probe)?;
            y += inset.top;
            tops.push(y);
            y += ITEM_HEIGHT + inset.bottom;
        }
        Ok(Self {
            size,
            tops,
            content_height: y,
        })
    }

    fn viewport(&self, scroll: f32) -> ListViewport {
        let children = self
            .tops
            .iter()
            .enumerate()
            .map(|(position, top)| (position, top - scroll))
            .filter(|(_, top)| top + ITEM_HEIGHT > 0.0 && *top < self.size.height)
            .map(|(position, top)| {
                VisibleChild::new(position, Rect::new(0.0, top, self.size.width, ITEM_HEIGHT))
            })
            .collect();
        ListViewport::linear(Orientation::Vertical, self.size).with_children(children)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = DecorationConfig::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--static" => config = config.mode(HeaderMode::Static),
            "--indexed" => config = config.group_lookup(GroupLookup::Indexed),
            other => log::warn!("ignoring argument {other}"),
        }
    }

    let adapter = Rc::new(Contacts {
        names: NAMES.to_vec(),
    });
    let mut headers = HeaderDecoration::new(adapter, config);
    let size = Size::new(360.0, 640.0);
    let list = SimulatedList::layout(&mut headers, size)?;
    log::info!(
        "{} contacts, {} px of content, mode {:?}",
        NAMES.len(),
        list.content_height,
        config.mode
    );

    let mut inspector = HeaderInspector::new();
    inspector.toggle();

    let max_scroll = (list.content_height - size.height).max(0.0);
    let mut scroll = 0.0;
    while scroll <= max_scroll {
        let viewport = list.viewport(scroll);
        let mut scene = Scene {
            clear_color: Color::from_hex("#121212"),
            nodes: Vec::new(),
        };
        inspector.time_pass(|| headers.draw_over(&viewport, &mut SceneCanvas::new(&mut scene)))?;
        inspector.overlay(&headers, &mut scene);

        let pinned = headers.find_header_at(size.width / 2.0, 1.0);
        log::info!(
            "scroll {scroll:>6.1}: {} headers drawn, pinned {:?}, {} scene nodes",
            headers.header_rects().len(),
            pinned.and_then(|p| adapter_letter(&headers, p)),
            scene.nodes.len()
        );
        scroll += 37.0;
    }

    headers.invalidate_headers();
    log::info!("cache cleared, {} headers cached", headers.cached_headers());
    Ok(())
}

fn adapter_letter(headers: &HeaderDecoration<Contacts>, position: usize) -> Option<char> {
    headers.adapter().letter(position)
}
