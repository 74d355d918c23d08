//! Translation/scale transforms in SVG attribute form

use std::fmt;

/// A point in either screen or diagram-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D transform as applied to a rendered diagram: translation plus
/// uniform scale, matching the `translate(x,y) scale(k)` attribute form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Transform {
    /// The identity transform: zero translation, unit scale
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    pub fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    /// Parse a transform attribute, recovering the `translate(...)` and
    /// `scale(...)` components.
    ///
    /// Parsing never fails: a missing or unreadable component falls back to
    /// its identity value, so a garbled attribute degrades to no-op panning
    /// rather than breaking the interaction.
    pub fn parse(attr: &str) -> Self {
        let (x, y) = component(attr, "translate(")
            .map(|inner| {
                let mut numbers = inner
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<f64>().unwrap_or(0.0));
                let x = numbers.next().unwrap_or(0.0);
                // A single-argument translate means y = 0
                let y = numbers.next().unwrap_or(0.0);
                (x, y)
            })
            .unwrap_or((0.0, 0.0));

        let k = component(attr, "scale(")
            .and_then(|inner| {
                inner
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .find(|s| !s.is_empty())
                    .and_then(|s| s.parse::<f64>().ok())
            })
            .unwrap_or(1.0);

        Self { x, y, k }
    }

    /// Translation component as a point
    pub fn translation(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Extract the text between `marker` and the following `)`
fn component<'a>(attr: &'a str, marker: &str) -> Option<&'a str> {
    let start = attr.find(marker)? + marker.len();
    let end = attr[start..].find(')')?;
    Some(&attr[start..start + end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_and_scale() {
        let t = Transform::parse("translate(10,20) scale(2)");
        assert_eq!(t, Transform::new(10.0, 20.0, 2.0));
    }

    #[test]
    fn test_parse_space_separated_translate() {
        let t = Transform::parse("translate(10 20) scale(0.5)");
        assert_eq!(t, Transform::new(10.0, 20.0, 0.5));
    }

    #[test]
    fn test_parse_single_argument_translate() {
        let t = Transform::parse("translate(15)");
        assert_eq!(t, Transform::new(15.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_missing_components_default_to_identity() {
        assert_eq!(Transform::parse(""), Transform::IDENTITY);
        assert_eq!(Transform::parse("rotate(45)"), Transform::IDENTITY);
        assert_eq!(
            Transform::parse("scale(3)"),
            Transform::new(0.0, 0.0, 3.0)
        );
    }

    #[test]
    fn test_parse_garbage_degrades_gracefully() {
        assert_eq!(
            Transform::parse("translate(abc,def) scale(xyz)"),
            Transform::new(0.0, 0.0, 1.0)
        );
        assert_eq!(Transform::parse("translate(scale("), Transform::IDENTITY);
    }

    #[test]
    fn test_display_round_trips() {
        let t = Transform::new(12.5, -4.0, 1.5);
        assert_eq!(t.to_string(), "translate(12.5,-4) scale(1.5)");
        assert_eq!(Transform::parse(&t.to_string()), t);
    }
}
