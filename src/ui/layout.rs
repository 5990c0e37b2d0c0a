//! Single-column layout with inner margin for content.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_ACTIVITY_LINES, PALETTE_MARGIN_BOTTOM,
    PALETTE_MAX_HEIGHT, STATUS_HEIGHT,
};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub activity: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Rect for the palette overlay, anchored to the bottom of the activity area.
#[inline]
pub fn palette_overlay_rect(activity: Rect) -> Rect {
    let max_h = activity
        .height
        .saturating_sub(PALETTE_MARGIN_BOTTOM)
        .min(PALETTE_MAX_HEIGHT);
    Rect {
        x: activity.x,
        y: activity.y + activity.height.saturating_sub(max_h),
        width: activity.width,
        height: max_h,
    }
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_ACTIVITY_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let activity = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        header: chunks[0],
        activity,
        input: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_vertically() {
        let r = compute(Rect::new(0, 0, 80, 30));
        assert_eq!(r.header.height, HEADER_HEIGHT);
        assert_eq!(r.status.y + r.status.height, 30);
        assert_eq!(r.activity.width, 80 - 2 * MARGIN_X);
        assert!(r.activity.y >= r.header.y + r.header.height);
    }

    #[test]
    fn overlay_fits_inside_activity() {
        let activity = Rect::new(1, 3, 78, 24);
        let overlay = palette_overlay_rect(activity);
        assert_eq!(overlay.height, PALETTE_MAX_HEIGHT);
        assert_eq!(overlay.y + overlay.height, activity.y + activity.height);

        let small = palette_overlay_rect(Rect::new(1, 3, 78, 5));
        assert_eq!(small.height, 5 - PALETTE_MARGIN_BOTTOM);
    }
}
