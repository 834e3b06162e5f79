use core::f32::consts::PI;

/// A closed 2D shape.
///
/// Used behind `Box<dyn Shape>` to measure dynamic dispatch; [`AnyShape`] provides the
/// statically dispatched counterpart.
pub trait Shape {
    /// Returns the enclosed area.
    fn area(&self) -> f32;

    /// Returns the length of the outline.
    fn perimeter(&self) -> f32;
}

/// A circle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    /// Distance from the centre to the outline.
    pub radius: f32,
}

impl Circle {
    /// Creates a circle with the given radius.
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f32 {
        self.radius * self.radius * PI
    }

    #[inline]
    fn perimeter(&self) -> f32 {
        2.0 * self.radius * PI
    }
}

/// An axis aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle with the given extents.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rect {
    #[inline]
    fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }
}

/// A closed set of shapes dispatched with a `match` instead of a vtable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyShape {
    /// A [`Circle`].
    Circle(Circle),
    /// A [`Rect`].
    Rect(Rect),
}

impl Shape for AnyShape {
    #[inline]
    fn area(&self) -> f32 {
        match self {
            Self::Circle(circle) => circle.area(),
            Self::Rect(rect) => rect.area(),
        }
    }

    #[inline]
    fn perimeter(&self) -> f32 {
        match self {
            Self::Circle(circle) => circle.perimeter(),
            Self::Rect(rect) => rect.perimeter(),
        }
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rect> for AnyShape {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}
