//! Paint one frame of a note view without a window and print the commands.
//!
//! Run with: cargo run -p zonemap --example headless_frame
//!
//! Set `RUST_LOG=zonemap=trace` to see layout and paint logs.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use zonemap::prelude::*;
use zonemap::render::DrawCommand;

#[derive(Clone, Debug)]
struct Stop {
    name: &'static str,
    at: Point,
    west: bool,
}

struct Route {
    stops: Vec<Stop>,
    marker: Bitmap,
}

impl MapAdapter for Route {
    type Item = Stop;

    fn count(&self) -> usize {
        self.stops.len()
    }

    fn item_at(&self, index: usize) -> Stop {
        self.stops[index].clone()
    }

    fn bitmap_for(&self, stop: &Stop) -> Option<Bitmap> {
        // The terminus has no marker and falls back to the placeholder.
        (stop.name != "Terminus").then(|| self.marker.clone())
    }

    fn coordinates(&self, stop: &Stop) -> Point {
        stop.at
    }

    fn anchor(&self, _stop: &Stop) -> Point {
        Point::new(0.5, 1.0)
    }

    fn on_item_clicked(&self, stop: &Stop) {
        tracing::info!(stop = stop.name, "stop selected");
    }
}

impl NoteImageAdapter for Route {
    fn is_left_side(&self, stop: &Stop) -> bool {
        stop.west
    }

    fn label(&self, stop: &Stop) -> String {
        format!("{}\n{:.0}, {:.0}", stop.name, stop.at.x, stop.at.y)
    }

    fn label_style(&self, _stop: &Stop) -> TextStyle {
        TextStyle::new(12.0, Color::DARK_GRAY)
    }

    fn line_style(&self, _stop: &Stop) -> Stroke {
        Stroke::new(Color::GRAY, 1.5)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "zonemap=debug".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let route = Route {
        stops: vec![
            Stop {
                name: "Harbour",
                at: Point::new(180.0, 520.0),
                west: true,
            },
            Stop {
                name: "Old Town",
                at: Point::new(220.0, 140.0),
                west: true,
            },
            Stop {
                name: "Market",
                at: Point::new(300.0, 330.0),
                west: false,
            },
            Stop {
                name: "Terminus",
                at: Point::new(260.0, 610.0),
                west: false,
            },
        ],
        marker: Bitmap::solid(16, 24, [200, 40, 40, 255])?,
    };

    let config = NoteImageConfig::from_toml_str("text_margin = 16.0\nclear_color = \"#f4f1ea\"")?;
    let handler = UiHandler::new();
    let mut view = NoteImageView::with_config(config, handler.clone())
        .with_background(Bitmap::solid(600, 900, [220, 230, 210, 255])?);
    view.resize(Size::new(480.0, 720.0));
    view.set_adapter(Arc::new(route));

    view.item_clicked().connect(|stop: &Stop| println!("clicked: {}", stop.name));

    handler.process_all();
    let mut renderer = RecordingRenderer::new();
    let measurer = FixedAdvanceMeasurer::default();

    if view.take_repaint() {
        renderer.begin_frame(Color::TRANSPARENT, view.size());
        let rect = view.rect();
        view.paint(&mut PaintContext::new(&mut renderer, &measurer, rect));
        let stats = renderer.end_frame();
        println!("{stats:?}");
    }

    for command in renderer.commands() {
        match command {
            DrawCommand::Text { text, origin, .. } => {
                println!("text  {text:<10} at ({:.1}, {:.1})", origin.x, origin.y)
            }
            DrawCommand::Line { from, to, .. } => println!(
                "line  ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                from.x, from.y, to.x, to.y
            ),
            other => println!("{other:?}"),
        }
    }

    // Press the first left label.
    let first = view.label_regions().rects().next();
    if let Some(rect) = first {
        let at = rect.to_rect().center();
        let mut press = WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left, at));
        view.event(&mut press);
    }

    Ok(())
}
