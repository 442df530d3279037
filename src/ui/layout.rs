use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for the role home
pub struct HomeLayout {
    /// Tab bar at the top
    pub tabs_area: Rect,
    /// Content of the current tab
    pub body_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Split the terminal into tab bar, body and legend
pub fn calculate_home_layout(terminal_size: Rect, legend_height: u16) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Tab bar (borders + titles)
            Constraint::Min(5),                // Tab content
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    HomeLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        legend_area: chunks[2],
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 8);
        let rect = centered_rect(60, 20, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_home_layout_stacks_vertically() {
        let layout = calculate_home_layout(Rect::new(0, 0, 100, 40), 3);
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.legend_area.height, 3);
        assert_eq!(layout.body_area.height, 34);
        assert_eq!(layout.body_area.y, 3);
    }
}
