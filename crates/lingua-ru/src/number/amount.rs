//! Fixed-point amounts and numeric input parsing.
//!
//! Inputs are parsed from their decimal text with winnow, never through
//! binary floating point arithmetic, so `2881.32` always has exactly 32
//! hundredths.

use std::fmt::{Display, Formatter, Result as FmtResult};

use winnow::ascii::{digit1, space0};
use winnow::combinator::{delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::error::LinguaError;

/// A non-negative decimal amount with two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    /// Integer part (rubles).
    pub whole: u64,
    /// Hundredths (kopecks), always below 100.
    pub hundredths: u8,
    /// Whether the input had no non-zero fractional digits.
    pub integral: bool,
}

impl Amount {
    /// An integral amount.
    pub const fn whole(whole: u64) -> Self {
        Self {
            whole,
            hundredths: 0,
            integral: true,
        }
    }

    /// Parse decimal text such as `"12.44"`, `"1720,1"` or `" 3000 "`.
    ///
    /// The fraction is rounded half up to two digits; a rounding carry moves
    /// into the whole part (`"1.999"` becomes 2.00).
    ///
    /// # Errors
    ///
    /// Returns [`LinguaError::InvalidNumber`] for negative, non-numeric or
    /// out-of-range input.
    ///
    /// ```
    /// use lingua_ru::number::Amount;
    ///
    /// let amount = Amount::parse("1720.1").unwrap();
    /// assert_eq!((amount.whole, amount.hundredths), (1720, 10));
    /// ```
    pub fn parse(input: &str) -> Result<Self, LinguaError> {
        if input.trim_start().starts_with('-') {
            return Err(LinguaError::invalid_number(
                input,
                "negative numbers are not supported",
            ));
        }
        let mut remaining = input;
        let (whole, fraction) = match decimal(&mut remaining) {
            Ok(parts) if remaining.is_empty() => parts,
            _ => {
                return Err(LinguaError::invalid_number(
                    input,
                    "expected digits with an optional '.' or ',' fraction",
                ));
            }
        };
        let whole: u64 = whole
            .parse()
            .map_err(|_| LinguaError::invalid_number(input, "integer part is too large"))?;
        let fraction = fraction.unwrap_or("");

        let mut digits = fraction.bytes().map(|b| b - b'0');
        let tenths = digits.next().unwrap_or(0);
        let units = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);
        let hundredths = u64::from(tenths * 10 + units) + u64::from(round_up);

        let whole = whole
            .checked_add(hundredths.div_euclid(100))
            .ok_or_else(|| LinguaError::invalid_number(input, "integer part is too large"))?;
        Ok(Self {
            whole,
            hundredths: u8::try_from(hundredths.rem_euclid(100)).unwrap_or_default(),
            integral: fraction.bytes().all(|b| b == b'0'),
        })
    }

    /// The whole part, or an error if the amount has a fraction.
    pub fn require_integral(&self) -> Result<u64, LinguaError> {
        if self.integral {
            Ok(self.whole)
        } else {
            Err(LinguaError::invalid_number(
                self.to_string(),
                "expected an integer",
            ))
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{:02}", self.whole, self.hundredths)
    }
}

/// Digits, then an optional `.`/`,` and fraction digits, with surrounding
/// spaces.
fn decimal<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    delimited(
        space0,
        (digit1, opt(preceded(one_of(['.', ',']), digit1))),
        space0,
    )
    .parse_next(input)
}

/// Conversion of caller-supplied numbers into an [`Amount`].
pub trait IntoAmount {
    fn into_amount(self) -> Result<Amount, LinguaError>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount, LinguaError> {
        Ok(self)
    }
}

macro_rules! unsigned_into_amount {
    ($($ty:ty),+) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self) -> Result<Amount, LinguaError> {
                    Ok(Amount::whole(u64::from(self)))
                }
            }
        )+
    };
}

macro_rules! signed_into_amount {
    ($($ty:ty),+) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self) -> Result<Amount, LinguaError> {
                    u64::try_from(self).map(Amount::whole).map_err(|_| {
                        LinguaError::invalid_number(
                            self.to_string(),
                            "negative numbers are not supported",
                        )
                    })
                }
            }
        )+
    };
}

unsigned_into_amount!(u8, u16, u32, u64);
signed_into_amount!(i8, i16, i32, i64, usize, isize);

impl IntoAmount for f64 {
    /// Converts through the shortest decimal text that round-trips the
    /// float, so `2881.32_f64` yields exactly 2881 and 32 hundredths.
    fn into_amount(self) -> Result<Amount, LinguaError> {
        if !self.is_finite() {
            return Err(LinguaError::invalid_number(
                self.to_string(),
                "value is not finite",
            ));
        }
        Amount::parse(&self.to_string())
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> Result<Amount, LinguaError> {
        if !self.is_finite() {
            return Err(LinguaError::invalid_number(
                self.to_string(),
                "value is not finite",
            ));
        }
        Amount::parse(&self.to_string())
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount, LinguaError> {
        Amount::parse(self)
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Amount, LinguaError> {
        Amount::parse(self)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Amount, LinguaError> {
        Amount::parse(&self)
    }
}
