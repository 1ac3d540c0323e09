//! Placement of the floating tooltip label.

/// Element box in viewport coordinates, as returned by
/// `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// Page coordinates for an absolutely positioned tooltip: horizontally
/// centered over the anchor, bottom edge `offset` pixels above its top.
/// Scroll offsets convert viewport coordinates to page coordinates.
pub fn tooltip_position(
    anchor: AnchorRect,
    tooltip_width: f64,
    tooltip_height: f64,
    offset: f64,
    scroll: (f64, f64),
) -> (f64, f64) {
    let left = anchor.left + anchor.width / 2.0 - tooltip_width / 2.0 + scroll.0;
    let top = anchor.top - tooltip_height - offset + scroll.1;
    (left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_above() {
        let anchor = AnchorRect {
            left: 100.0,
            top: 200.0,
            width: 80.0,
        };
        assert_eq!(
            tooltip_position(anchor, 40.0, 20.0, 5.0, (0.0, 0.0)),
            (120.0, 175.0)
        );
    }

    #[test]
    fn test_scrolled_page() {
        let anchor = AnchorRect {
            left: 10.0,
            top: 30.0,
            width: 20.0,
        };
        assert_eq!(
            tooltip_position(anchor, 100.0, 24.0, 5.0, (0.0, 400.0)),
            (-30.0, 401.0)
        );
    }
}
