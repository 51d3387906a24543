// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::binning::value::Value;

/// Element types that can be binned.
///
/// An element converts into a validated [`Value`] on the way in and is rebuilt from a
/// group label on the way out, so the binned output has the same element type as the
/// input. Floating point types use `NaN` as the missing marker, `Option<i64>` uses
/// `None`, and plain integer types have no missing marker at all.
pub trait OrdinalElement: Copy + Send + Sync {
    /// Convert to a [`Value`], or `None` if the element is not integer-like
    /// (fractional, infinite, or outside the `i64` range).
    fn to_value(self) -> Option<Value>;

    /// Build an element from a group label, with `None` standing for missing.
    ///
    /// Returns `None` if the label (or the missing marker) cannot be represented.
    fn from_label(label: Option<usize>) -> Option<Self>;

    /// Lossy numeric view used when reporting invalid elements.
    fn as_f64(self) -> f64;
}

macro_rules! impl_ordinal_int {
    ($($t:ty),* $(,)?) => {$(
        impl OrdinalElement for $t {
            fn to_value(self) -> Option<Value> {
                i64::try_from(self).ok().map(Value::Present)
            }

            fn from_label(label: Option<usize>) -> Option<Self> {
                label.and_then(|l| <$t>::try_from(l).ok())
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_ordinal_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Bounds of the i64 range as exactly representable floats: [-2^63, 2^63).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

macro_rules! impl_ordinal_float {
    ($($t:ty),* $(,)?) => {$(
        impl OrdinalElement for $t {
            fn to_value(self) -> Option<Value> {
                if self.is_nan() {
                    return Some(Value::Missing);
                }
                if !self.is_finite() || self.fract() != 0.0 {
                    return None;
                }
                let v = self as f64;
                if !(I64_LOWER..I64_UPPER).contains(&v) {
                    return None;
                }
                Some(Value::Present(v as i64))
            }

            fn from_label(label: Option<usize>) -> Option<Self> {
                Some(label.map_or(<$t>::NAN, |l| l as $t))
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_ordinal_float!(f32, f64);

impl OrdinalElement for Option<i64> {
    fn to_value(self) -> Option<Value> {
        Some(Value::from(self))
    }

    fn from_label(label: Option<usize>) -> Option<Self> {
        match label {
            Some(l) => i64::try_from(l).ok().map(Some),
            None => Some(None),
        }
    }

    fn as_f64(self) -> f64 {
        self.map_or(f64::NAN, |v| v as f64)
    }
}

impl OrdinalElement for Value {
    fn to_value(self) -> Option<Value> {
        Some(self)
    }

    fn from_label(label: Option<usize>) -> Option<Self> {
        <Option<i64>>::from_label(label).map(Value::from)
    }

    fn as_f64(self) -> f64 {
        self.present().as_f64()
    }
}
