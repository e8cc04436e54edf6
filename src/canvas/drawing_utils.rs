use tui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders},
};

/// Graphs shorter than this have no room for time labels.
const TIME_LABEL_HEIGHT_LIMIT: u16 = 7;

/// Determine whether a graph's x-labels should be hidden.
pub fn should_hide_x_label(always_hide_time: bool, draw_loc: Rect) -> bool {
    always_hide_time || draw_loc.height < TIME_LABEL_HEIGHT_LIMIT
}

/// Return a bordered widget block.
pub fn widget_block(border_type: BorderType) -> Block<'static> {
    Block::default()
        .border_type(border_type)
        .borders(Borders::all())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hide_x_label() {
        let rect = Rect::new(0, 0, 10, 10);
        let small_rect = Rect::new(0, 0, 10, 6);

        assert!(should_hide_x_label(true, rect));
        assert!(should_hide_x_label(false, small_rect));
        assert!(!should_hide_x_label(false, rect));
    }
}
