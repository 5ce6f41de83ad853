/// Immutable 2D vector used for planar distance and heading math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, u: Vector2) -> Vector2 {
        Vector2::new(self.x + u.x, self.y + u.y)
    }

    pub fn sub(self, u: Vector2) -> Vector2 {
        Vector2::new(self.x - u.x, self.y - u.y)
    }

    pub fn multiply(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector yields NaN components; callers comparing against the
    /// result see every comparison fail.
    pub fn normalize(self) -> Vector2 {
        let length = self.magnitude();
        Vector2::new(self.x / length, self.y / length)
    }

    pub fn dot(self, u: Vector2) -> f64 {
        self.x * u.x + self.y * u.y
    }
}
