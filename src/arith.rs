use anyhow::{anyhow, Result};
use std::ops::{Add, Sub};

/// Returns the sum of `a` and `b`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Returns `a` minus `b`.
pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// Adds two integers, failing instead of wrapping when the sum does not fit.
pub fn checked_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .ok_or_else(|| anyhow!("{} + {} overflows i64", a, b))
}

/// Subtracts two integers, failing instead of wrapping when the difference does not fit.
pub fn checked_subtract(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b)
        .ok_or_else(|| anyhow!("{} - {} overflows i64", a, b))
}
