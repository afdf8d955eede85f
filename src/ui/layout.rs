use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Two-column "desktop" layout at or above the breakpoint, stacked below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Narrow,
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: u16, wide_breakpoint: u16) -> Self {
        if width >= wide_breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Splits the screen into body and a one-line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 1.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + body.height,
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn split_columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent.min(100)),
        ])
        .split(area);
    (columns[0], columns[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_width(99, 100), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(100, 100), LayoutMode::Wide);
    }

    #[test]
    fn footer_takes_last_line() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(body.height, 23);
        assert_eq!(footer.y, 23);
        assert_eq!(footer.height, 1);
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let rect = centered_rect_by_size(200, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect.width, 80);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 7);
    }
}
