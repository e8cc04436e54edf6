//! A line graph of percentages over time.

use std::borrow::Cow;

use concat_string::concat_string;
use tui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, BorderType, Chart, Dataset, GraphType},
    Frame,
};

use crate::canvas::drawing_utils::{should_hide_x_label, widget_block};

/// Slightly above 100 so a line at 100% isn't drawn on the border.
const Y_MAX: f64 = 100.5;

const Y_LABELS: [&str; 2] = ["  0%", "100%"];

/// How to draw a graph of `values` sampled every `rate_ms` milliseconds,
/// oldest first, onto a fixed 0 to 100 range.
pub struct TimeGraph<'a> {
    pub title: Cow<'a, str>,

    /// The update rate, in milliseconds.
    pub rate_ms: u64,

    /// Whether to always hide the time labels.
    pub hide_time: bool,

    pub marker: Marker,
    pub graph_style: Style,
    pub title_style: Style,
    pub border_style: Style,
    pub axis_style: Style,
}

impl TimeGraph<'_> {
    /// The labels at either end of the x-axis for `len` points.
    fn x_labels(&self, len: usize) -> [String; 2] {
        let span_seconds = (len as u64).saturating_mul(self.rate_ms) / 1000;
        [concat_string!(span_seconds.to_string(), "s"), "0s".to_string()]
    }

    fn x_axis(&self, len: usize, hide_labels: bool) -> Axis<'_> {
        let axis = Axis::default()
            .bounds([0.0, len.saturating_sub(1) as f64])
            .style(self.axis_style);

        if hide_labels {
            axis
        } else {
            axis.labels(
                self.x_labels(len)
                    .into_iter()
                    .map(|label| Span::styled(label, self.axis_style)),
            )
        }
    }

    fn y_axis(&self) -> Axis<'_> {
        Axis::default()
            .bounds([0.0, Y_MAX])
            .style(self.axis_style)
            .labels(
                Y_LABELS
                    .iter()
                    .map(|label| Span::styled(*label, self.axis_style)),
            )
    }

    /// Draw `values` as a line at `draw_loc`.
    pub fn draw(&self, f: &mut Frame<'_>, draw_loc: Rect, values: &[f64]) {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(itx, value)| (itx as f64, *value))
            .collect();

        let dataset = Dataset::default()
            .data(&points)
            .graph_type(GraphType::Line)
            .marker(self.marker)
            .style(self.graph_style);

        let block = widget_block(BorderType::Plain)
            .border_style(self.border_style)
            .title_top(Line::styled(self.title.as_ref(), self.title_style));

        let hide_labels = should_hide_x_label(self.hide_time, draw_loc);
        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(self.x_axis(values.len(), hide_labels))
            .y_axis(self.y_axis())
            .legend_position(None);

        f.render_widget(chart, draw_loc);
    }
}

#[cfg(test)]
mod test {
    use tui::{
        backend::TestBackend,
        style::{Color, Style},
        Terminal,
    };

    use super::*;

    fn create_time_graph(rate_ms: u64) -> TimeGraph<'static> {
        TimeGraph {
            title: " CPU-0 ".into(),
            rate_ms,
            hide_time: false,
            marker: Marker::Braille,
            graph_style: Style::default().fg(Color::Green),
            title_style: Style::default().fg(Color::White),
            border_style: Style::default().fg(Color::Gray),
            axis_style: Style::default().fg(Color::DarkGray),
        }
    }

    fn render(graph: &TimeGraph<'_>, width: u16, height: u16, values: &[f64]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                graph.draw(f, area, values);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn x_labels_cover_the_history() {
        assert_eq!(create_time_graph(1000).x_labels(500), ["500s", "0s"]);
        assert_eq!(create_time_graph(250).x_labels(10), ["2s", "0s"]);
    }

    #[test]
    fn huge_rates_saturate_the_label() {
        let seconds = u64::MAX / 1000;
        assert_eq!(
            create_time_graph(u64::MAX).x_labels(500),
            [format!("{seconds}s"), "0s".to_string()]
        );
    }

    #[test]
    fn draws_title_and_labels() {
        let graph = create_time_graph(1000);
        let screen = render(&graph, 40, 12, &[10.0, 50.0, 90.0, 100.0]);

        assert!(screen.contains("CPU-0"));
        assert!(screen.contains("100%"));
        assert!(screen.contains("4s"));
    }

    #[test]
    fn hidden_time_has_no_x_labels() {
        let graph = TimeGraph {
            hide_time: true,
            ..create_time_graph(1000)
        };
        let screen = render(&graph, 40, 12, &[10.0, 50.0, 90.0, 100.0]);

        assert!(!screen.contains("4s"));
        assert!(screen.contains("100%"));
    }

    #[test]
    fn tiny_areas_do_not_panic() {
        let graph = create_time_graph(1000);
        render(&graph, 3, 2, &[0.0; 8]);
        render(&graph, 40, 12, &[]);
    }
}
