//! Utility functions for rendering UI components

use ratatui::layout::Rect;

pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms.div_ceil(1000);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// A popup of at most `width` x `height`, centred and kept inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(1);
    let height = height.min(area.height.saturating_sub(2)).max(1);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Rows needed to show `text` wrapped at `width` columns
pub fn wrapped_height(text: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    text.split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .max(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(200), "0:01");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(600_000), "10:00");
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let tiny = centered_rect(Rect::new(0, 0, 10, 5), 40, 10);
        assert!(tiny.width <= 10 && tiny.height <= 5);
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("abcdefghij", 10), 1);
        assert_eq!(wrapped_height("abcdefghijk", 10), 2);
        assert_eq!(wrapped_height("a\nb", 10), 2);
        assert_eq!(wrapped_height("a\n", 10), 2);
    }
}
