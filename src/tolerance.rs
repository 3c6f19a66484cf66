use num_traits::{Float, Signed};

/// A value that is always positive.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positive<T>(T);

impl<T> From<T> for Positive<T>
where
    T: Signed,
{
    fn from(value: T) -> Self {
        Self(value.abs())
    }
}

impl<T> Positive<T> {
    /// Returns the inner value of self.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// The acceptable deviation between two values.
///
/// The default tolerance is zero, which makes [`IsClose`] an exact comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance<T> {
    /// The maximum allowed difference between two values.
    pub relative: Positive<T>,
    /// Used to compare values near zero.
    pub absolute: Positive<T>,
}

impl<T> Tolerance<T>
where
    T: Signed,
{
    /// Returns a tolerance with the given relative and absolute deviations.
    pub fn new(relative: T, absolute: T) -> Self {
        Self {
            relative: relative.into(),
            absolute: absolute.into(),
        }
    }
}

/// A value whose equality depends on a tolerance.
pub trait IsClose {
    type Scalar;

    /// Returns true if, and only if, self and rhs are close enough given a tolerance;
    /// otherwise returns false.
    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<Self::Scalar>) -> bool;
}

impl<T> IsClose for T
where
    T: Float,
{
    type Scalar = T;

    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<Self::Scalar>) -> bool {
        (*self - *rhs).abs()
            <= Self::max(
                tolerance.relative.0 * Self::max(self.abs(), rhs.abs()),
                tolerance.absolute.0,
            )
    }
}

#[cfg(test)]
mod tests {
    use crate::{IsClose, Tolerance};

    #[test]
    fn scalar_is_close() {
        struct Test {
            name: &'static str,
            lhs: f64,
            rhs: f64,
            tolerance: Tolerance<f64>,
            want: bool,
        }

        vec![
            Test {
                name: "equal values with zero tolerance",
                lhs: 1.5,
                rhs: 1.5,
                tolerance: Tolerance::default(),
                want: true,
            },
            Test {
                name: "different values with zero tolerance",
                lhs: 1.5,
                rhs: 1.5 + f64::EPSILON * 2.,
                tolerance: Tolerance::default(),
                want: false,
            },
            Test {
                name: "values within the absolute tolerance",
                lhs: 0.,
                rhs: 1e-10,
                tolerance: Tolerance::new(0., 1e-9),
                want: true,
            },
            Test {
                name: "values within the relative tolerance",
                lhs: 1000.,
                rhs: 1000.5,
                tolerance: Tolerance::new(1e-3, 0.),
                want: true,
            },
            Test {
                name: "negative tolerances are taken as absolute values",
                lhs: 0.,
                rhs: 0.5,
                tolerance: Tolerance::new(0., -1.),
                want: true,
            },
            Test {
                name: "nan is never close",
                lhs: f64::NAN,
                rhs: f64::NAN,
                tolerance: Tolerance::new(1., 1.),
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.lhs.is_close(&test.rhs, &test.tolerance);
            assert_eq!(got, test.want, "{}", test.name);
        });
    }
}
