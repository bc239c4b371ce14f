use rand::Rng;

/// A point in the unit square.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniform sample from `[0,1) x [0,1)`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random::<f64>();
        let y = rng.random::<f64>();
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
