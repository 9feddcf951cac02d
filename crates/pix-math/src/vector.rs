//! 3-component color vector.
//!
//! [`ColorVector`] is the per-pixel working value of every engine: a pixel is
//! decoded into one, handed to a transform, and encoded back.
//!
//! # Usage
//!
//! ```rust
//! use pix_math::{add, dot, scale, ColorVector};
//!
//! let rgb = ColorVector::new(1.0, 0.5, 0.25);
//! let doubled = scale(rgb, 2.0);
//! let sum = add(rgb, doubled);
//! let luma = dot(rgb, ColorVector::new(0.299, 0.587, 0.114));
//! # let _ = (sum, luma);
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A color triple in normalized RGB or HSV space.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
/// For RGB: x=R, y=G, z=B. For HSV: x=H, y=S, z=V.
///
/// # Example
///
/// ```rust
/// use pix_math::ColorVector;
///
/// let color = ColorVector::new(0.5, 0.25, 1.0);
/// assert_eq!(color.x, 0.5);
/// assert_eq!(color[2], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct ColorVector {
    /// X component (R for RGB, hue for HSV)
    pub x: f32,
    /// Y component (G for RGB, saturation for HSV)
    pub y: f32,
    /// Z component (B for RGB, value for HSV)
    pub z: f32,
}

impl ColorVector {
    /// Zero vector (black in RGB).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (white in RGB).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// ```rust
    /// use pix_math::ColorVector;
    ///
    /// let gray = ColorVector::splat(0.5);
    /// assert_eq!(gray, ColorVector::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    ///
    /// Used for luminance: `rgb.dot(weights)`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Clamps each component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        self.min(Self::ONE).max(Self::ZERO)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Component-wise sum of two vectors.
#[inline]
pub fn add(a: ColorVector, b: ColorVector) -> ColorVector {
    a + b
}

/// Multiplies a vector by a scalar.
#[inline]
pub fn scale(v: ColorVector, k: f32) -> ColorVector {
    v.scale(k)
}

/// Dot product of two vectors.
#[inline]
pub fn dot(a: ColorVector, b: ColorVector) -> f32 {
    a.dot(b)
}

impl Index<usize> for ColorVector {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("ColorVector index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for ColorVector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("ColorVector index out of bounds: {}", i),
        }
    }
}

impl Add for ColorVector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for ColorVector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for ColorVector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// component-wise
impl Mul for ColorVector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for ColorVector {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<ColorVector> for f32 {
    type Output = ColorVector;

    #[inline]
    fn mul(self, rhs: ColorVector) -> ColorVector {
        rhs.scale(self)
    }
}

impl Div<f32> for ColorVector {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for ColorVector {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<ColorVector> for [f32; 3] {
    #[inline]
    fn from(v: ColorVector) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for ColorVector {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<ColorVector> for glam::Vec3 {
    #[inline]
    fn from(v: ColorVector) -> glam::Vec3 {
        v.to_glam()
    }
}
