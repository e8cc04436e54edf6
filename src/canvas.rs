//! Drawing the dashboard.

pub mod components;
mod drawing_utils;
mod widgets;

use std::rc::Rc;

use tui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::{
    app::{layout_manager::GridLayout, App},
    options::Styles,
};

/// Handles the canvas' state.
pub struct Painter {
    pub styles: Styles,
}

impl Painter {
    pub fn init(styles: Styles) -> Self {
        Self { styles }
    }

    /// Draw one frame: the total graph along the top, with one graph per
    /// discovered core in a grid below it.
    pub fn draw_data(&self, f: &mut Frame<'_>, app: &App) {
        let (total_loc, grid) = partition(f.area(), app.layout);
        self.draw_total_graph(f, app, total_loc);

        let cores: Vec<_> = app.history.discovered_cores().collect();
        for core in cores {
            if let Some((row, column)) = app.layout.cell(core.index()) {
                self.draw_core_graph(f, app, core, grid[row][column]);
            }
        }
    }
}

fn equal_ratios(count: usize) -> Vec<Constraint> {
    let count = count as u32;
    (0..count).map(|_| Constraint::Ratio(1, count)).collect()
}

/// Split `area` into `layout.rows + 1` equal bands. The first band is the
/// total graph's, and the rest are split into `layout.columns` cells each,
/// indexed by row and then column.
fn partition(area: Rect, layout: GridLayout) -> (Rect, Vec<Rc<[Rect]>>) {
    let bands: Rc<[Rect]> = Layout::vertical(equal_ratios(layout.rows + 1)).split(area);

    let grid = bands[1..]
        .iter()
        .map(|band| Layout::horizontal(equal_ratios(layout.columns)).split(*band))
        .collect();

    (bands[0], grid)
}
