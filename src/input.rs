//! Input adapter
//!
//! Translates host input events into direction requests. Pure functions, so
//! the mapping is testable without a browser.

use crate::sim::Heading;

/// Map a keyboard key, as reported by the host, to a heading. Arrow keys and
/// WASD are recognized; anything else is ignored.
pub fn heading_from_key(key: &str) -> Option<Heading> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Heading::Up),
        "ArrowDown" | "s" | "S" => Some(Heading::Down),
        "ArrowLeft" | "a" | "A" => Some(Heading::Left),
        "ArrowRight" | "d" | "D" => Some(Heading::Right),
        _ => None,
    }
}

/// Map a touch/pointer position to a heading by quadrant against the surface
/// midpoint: the left half steers up (upper) or down (lower), the right half
/// right (upper) or left (lower).
pub fn heading_from_point(x: f32, y: f32, width: f32, height: f32) -> Heading {
    if x < width / 2.0 {
        if y < height / 2.0 {
            Heading::Up
        } else {
            Heading::Down
        }
    } else if y < height / 2.0 {
        Heading::Right
    } else {
        Heading::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(heading_from_key("ArrowUp"), Some(Heading::Up));
        assert_eq!(heading_from_key("ArrowDown"), Some(Heading::Down));
        assert_eq!(heading_from_key("ArrowLeft"), Some(Heading::Left));
        assert_eq!(heading_from_key("ArrowRight"), Some(Heading::Right));
        assert_eq!(heading_from_key("w"), Some(Heading::Up));
        assert_eq!(heading_from_key("S"), Some(Heading::Down));
        assert_eq!(heading_from_key("Escape"), None);
        assert_eq!(heading_from_key(" "), None);
    }

    #[test]
    fn test_quadrant_mapping() {
        // 400x400 surface, midpoint at (200, 200)
        assert_eq!(heading_from_point(100.0, 100.0, 400.0, 400.0), Heading::Up);
        assert_eq!(heading_from_point(100.0, 300.0, 400.0, 400.0), Heading::Down);
        assert_eq!(heading_from_point(300.0, 100.0, 400.0, 400.0), Heading::Right);
        assert_eq!(heading_from_point(300.0, 300.0, 400.0, 400.0), Heading::Left);
    }

    #[test]
    fn test_quadrant_mapping_midpoint_belongs_right_and_lower() {
        assert_eq!(heading_from_point(200.0, 200.0, 400.0, 400.0), Heading::Left);
    }
}
