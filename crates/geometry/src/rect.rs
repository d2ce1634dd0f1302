//! Rectangle type for drawable bounds, viewports, and crop regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// `(left, top)` is the top-left corner and `(right, bottom)` the
/// bottom-right one. Rects are plain values: every operation returns a
/// new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Create a rect from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rect of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rect centered at `(cx, cy)` with the given dimensions.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let left = cx - width / 2.0;
        let top = cy - height / 2.0;
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Aspect ratio (`width / height`). Undefined for zero-height rects.
    pub fn ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// True when the rect has no positive area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Check whether `other` lies entirely within this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}, {:.2}, {:.2}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Failure to parse a rect or size from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid rect '{input}': expected WIDTHxHEIGHT or LEFT,TOP,RIGHT,BOTTOM")]
pub struct ParseRectError {
    input: String,
}

impl FromStr for Rect {
    type Err = ParseRectError;

    /// Accepts `1920x1080` (anchored at the origin) or `0,0,1920,1080`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRectError {
            input: s.to_string(),
        };
        let parse = |part: &str| part.trim().parse::<f64>().map_err(|_| err());

        if let Some((w, h)) = s.split_once(['x', 'X']) {
            return Ok(Rect::from_size(parse(w)?, parse(h)?));
        }

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [l, t, r, b] => Ok(Rect::new(parse(l)?, parse(t)?, parse(r)?, parse(b)?)),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!((r.center_x(), r.center_y()), (60.0, 45.0));
        assert!((r.ratio() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(50.0, 50.0, 20.0, 10.0);
        assert_eq!(r, Rect::new(40.0, 45.0, 60.0, 55.0));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(Rect::new(5.0, 0.0, 1.0, 10.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::from_size(100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 101.0, 20.0)));
    }

    #[test]
    fn test_parse_size() {
        let r: Rect = "1920x1080".parse().unwrap();
        assert_eq!(r, Rect::from_size(1920.0, 1080.0));
    }

    #[test]
    fn test_parse_edges() {
        let r: Rect = "0, 10, 200.5, 100".parse().unwrap();
        assert_eq!(r, Rect::new(0.0, 10.0, 200.5, 100.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("wide".parse::<Rect>().is_err());
        assert!("1,2,3".parse::<Rect>().is_err());
        assert!("10xabc".parse::<Rect>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json["left"], 1.0);
        assert_eq!(json["bottom"], 4.0);
    }
}
