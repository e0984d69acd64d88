//! Layout calculations shared by the components

use ratatui::layout::Rect;

/// Calculate a centered popup area of at most `width` x `height` cells
///
/// The popup shrinks to fit when the surrounding area is smaller.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_popup_shrinks_to_fit() {
        let area = Rect::new(5, 5, 20, 6);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 6);
        assert_eq!(popup.x, 5);
        assert_eq!(popup.y, 5);
    }
}
