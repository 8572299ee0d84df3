use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Stacked widget layout, top to bottom
pub struct AppLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub result_area: Rect,
    pub scale_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title + theme
                Constraint::Length(3), // Input box
                Constraint::Length(3), // Result
                Constraint::Length(3), // Scale gauge
                Constraint::Min(3),    // History list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            input_area: chunks[1],
            result_area: chunks[2],
            scale_area: chunks[3],
            history_area: chunks[4],
            status_area: chunks[5],
        }
    }
}

/// Centered box for the confirmation dialog
pub fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    dialog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 30));

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.result_area.height, 3);
        assert_eq!(layout.scale_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);
        // Remaining rows go to the history list
        assert_eq!(layout.history_area.height, 19);
        assert_eq!(layout.history_area.y, 10);
    }

    #[test]
    fn test_dialog_is_centered() {
        let dialog = dialog_area(Rect::new(0, 0, 80, 24), 40, 5);
        assert_eq!(dialog.width, 40);
        assert_eq!(dialog.height, 5);
        assert_eq!(dialog.x, 20);
        assert!((9..=10).contains(&dialog.y));
    }

    #[test]
    fn test_dialog_shrinks_to_area() {
        let dialog = dialog_area(Rect::new(0, 0, 20, 3), 40, 5);
        assert!(dialog.width <= 20);
        assert!(dialog.height <= 3);
    }
}
