//! Pixel units, so layout math doesn't accidentally mix raw floats
//! with positions on the page.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sum};

/// A distance in pixels. Background images address whole pixels, but
/// layout accumulates fractional advances and perturbations, so the
/// inner value is an `f32` and is only rounded at compositing time.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Deref, Display, From, Into,
    Sum,
)]
pub struct Px(pub f32);

impl Px {
    /// Zero pixels
    pub const ZERO: Px = Px(0.0);
}

impl std::ops::Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

/// Dividing two distances yields a unitless ratio
impl std::ops::Div<Px> for Px {
    type Output = f32;

    fn div(self, rhs: Px) -> f32 {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keeps_units() {
        let a = Px(12.0);
        let b = Px(4.0);
        assert_eq!(a + b, Px(16.0));
        assert_eq!(a - b, Px(8.0));
        assert_eq!(a * 0.5, Px(6.0));
        assert_eq!(a / 4.0, Px(3.0));
        assert_eq!(a / b, 3.0);
    }

    #[test]
    fn converts_to_and_from_f32() {
        let px: Px = 7.5.into();
        let raw: f32 = px.into();
        assert_eq!(raw, 7.5);
        assert_eq!(*Px(2.0), 2.0);
    }
}
