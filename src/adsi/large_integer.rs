/*!
 * Large Integer
 * Plain value form of IADsLargeInteger
 */

use super::traits::LargeIntegerValue;
use crate::core::errors::DelegateError;
use serde::{Deserialize, Serialize};

/// Already-materialized large integer
///
/// Interfaces that read both halves eagerly return this; reading it never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LargeInteger {
    pub high_part: i32,
    pub low_part: i32,
}

impl LargeInteger {
    #[inline]
    pub const fn new(high_part: i32, low_part: i32) -> Self {
        Self {
            high_part,
            low_part,
        }
    }

    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self {
            high_part: (value >> 32) as i32,
            low_part: value as i32,
        }
    }
}

impl From<i64> for LargeInteger {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl LargeIntegerValue for LargeInteger {
    fn high_part(&self) -> Result<i32, DelegateError> {
        Ok(self.high_part)
    }

    fn low_part(&self) -> Result<i32, DelegateError> {
        Ok(self.low_part)
    }
}
