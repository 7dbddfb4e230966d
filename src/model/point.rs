use std::fmt;

/// Integer diagram coordinate stored in `x`/`y` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Parse coordinate attribute values.
    ///
    /// Fractional values are truncated; anything unparsable becomes 0.
    pub fn parse(x: &str, y: &str) -> Self {
        Self {
            x: parse_coordinate(x),
            y: parse_coordinate(y),
        }
    }
}

fn parse_coordinate(value: &str) -> i32 {
    let value = value.trim();
    value
        .parse::<i32>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().map(|v| v as i32))
        .unwrap_or(0)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
