use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// The hero slideshow box: right half of the body, vertically centered.
/// Input hit-testing (hover pause, swipe) and rendering both resolve
/// the box through this function so they can never disagree.
pub fn hero_slideshow_rect(body: Rect) -> Rect {
    let width = (body.width / 2).saturating_sub(4).clamp(0, 42);
    let height = body.height.saturating_sub(4).clamp(0, 14);
    let x = body.x + body.width.saturating_sub(width + 2);
    let y = body.y + (body.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_partition_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, area.height);
        assert_eq!(body.y, header.height);
    }

    #[test]
    fn centered_rect_never_exceeds_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 10,
        };
        let rect = centered_rect_by_size(area, 50, 50);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn slideshow_fits_inside_the_body() {
        let body = Rect {
            x: 0,
            y: 3,
            width: 120,
            height: 24,
        };
        let rect = hero_slideshow_rect(body);
        assert!(rect.x >= body.x);
        assert!(rect.y >= body.y);
        assert!(rect.right() <= body.right());
        assert!(rect.bottom() <= body.bottom());
    }

    #[test]
    fn slideshow_degrades_to_empty_on_tiny_terminals() {
        let body = Rect {
            x: 0,
            y: 0,
            width: 6,
            height: 3,
        };
        let rect = hero_slideshow_rect(body);
        assert!(rect.width <= body.width);
    }
}
