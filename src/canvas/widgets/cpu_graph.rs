use tui::{layout::Rect, style::Style, symbols::Marker, Frame};

use crate::{
    app::{data::CoreId, App},
    canvas::{components::time_graph::TimeGraph, Painter},
};

impl Painter {
    fn cpu_time_graph(&self, app: &App, title: String, graph_style: Style) -> TimeGraph<'static> {
        let fields = &app.app_config_fields;

        TimeGraph {
            title: title.into(),
            rate_ms: fields.update_rate,
            hide_time: fields.hide_time,
            marker: if fields.use_dot {
                Marker::Dot
            } else {
                Marker::Braille
            },
            graph_style,
            title_style: self.styles.label_style,
            border_style: self.styles.border_style,
            axis_style: self.styles.axis_style,
        }
    }

    /// Draw the graph of overall CPU usage.
    pub fn draw_total_graph(&self, f: &mut Frame<'_>, app: &App, draw_loc: Rect) {
        let title = format!(" CPU-Total {:.0}% ", app.total_latest());

        self.cpu_time_graph(app, title, self.styles.total_style)
            .draw(f, draw_loc, &app.total_sequence());
    }

    /// Draw the graph of a single core's usage.
    pub fn draw_core_graph(&self, f: &mut Frame<'_>, app: &App, core: CoreId, draw_loc: Rect) {
        let title = format!(" CPU-{} {:.0}% ", core.index(), app.history.latest(core));

        self.cpu_time_graph(app, title, self.styles.core_style)
            .draw(f, draw_loc, &app.history.read_sequence(core));
    }
}
