use super::PreValidate;

///
/// Clamp
///
/// Bounds are normalised on construction, so `Clamp::new(9, 1)` clamps to
/// `1..=9`. Values that compare unordered (NaN) pass through.
///

#[derive(Clone, Copy, Debug)]
pub struct Clamp<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Clamp<T> {
    pub fn new(min: T, max: T) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }
}

impl<T: PartialOrd + Clone> PreValidate<T> for Clamp<T> {
    fn pre_validate(&self, value: T) -> T {
        if value < self.min {
            self.min.clone()
        } else if value > self.max {
            self.max.clone()
        } else {
            value
        }
    }
}

///
/// AtLeast
///

#[derive(Clone, Copy, Debug)]
pub struct AtLeast<T>(pub T);

impl<T: PartialOrd + Clone> PreValidate<T> for AtLeast<T> {
    fn pre_validate(&self, value: T) -> T {
        if value < self.0 { self.0.clone() } else { value }
    }
}

///
/// AtMost
///

#[derive(Clone, Copy, Debug)]
pub struct AtMost<T>(pub T);

impl<T: PartialOrd + Clone> PreValidate<T> for AtMost<T> {
    fn pre_validate(&self, value: T) -> T {
        if value > self.0 { self.0.clone() } else { value }
    }
}

///
/// TESTS
///
