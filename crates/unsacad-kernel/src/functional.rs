//! Fallible-composition helpers on top of the native sum types.
//!
//! Rust's `Result` and `Option` already provide the tagged-union contract
//! the domain layer composes with (`map`, `and_then`, `match`, `unwrap*`).
//! This module adds the combinators the standard library does not ship:
//! combining a homogeneous list of results and combining a heterogeneous
//! tuple of results, both with deterministic first-failure-wins semantics.

/// Combines a sequence of results into a result of all values.
///
/// Scans left to right and short-circuits at the first `Err`, so error
/// reporting is deterministic regardless of how many items fail.
pub fn combine<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> Result<Vec<T>, E> {
    let mut values = Vec::new();
    for result in results {
        values.push(result?);
    }
    Ok(values)
}

/// Combines a sequence of options into an option of all values.
///
/// First `None` wins, mirroring [`combine`].
pub fn combine_options<T>(options: impl IntoIterator<Item = Option<T>>) -> Option<Vec<T>> {
    let mut values = Vec::new();
    for option in options {
        values.push(option?);
    }
    Some(values)
}

/// Heterogeneous-tuple variant of [`combine`].
///
/// Preserves the positional type of every element; the first `Err`
/// (left to right) short-circuits the whole tuple.
pub trait ResultAll<V, E> {
    /// Returns `Ok` of all values, or the first error.
    fn all(self) -> Result<V, E>;
}

/// Combines a tuple of results, preserving positional types.
pub fn all<V, E, T: ResultAll<V, E>>(tuple: T) -> Result<V, E> {
    tuple.all()
}

macro_rules! impl_result_all {
    ($($T:ident),+) => {
        impl<$($T,)+ Err> ResultAll<($($T,)+), Err> for ($(Result<$T, Err>,)+) {
            #[allow(non_snake_case)]
            fn all(self) -> Result<($($T,)+), Err> {
                let ($($T,)+) = self;
                Ok(($($T?,)+))
            }
        }
    };
}

impl_result_all!(T1, T2);
impl_result_all!(T1, T2, T3);
impl_result_all!(T1, T2, T3, T4);
impl_result_all!(T1, T2, T3, T4, T5);
impl_result_all!(T1, T2, T3, T4, T5, T6);
impl_result_all!(T1, T2, T3, T4, T5, T6, T7);
impl_result_all!(T1, T2, T3, T4, T5, T6, T7, T8);

/// Heterogeneous-tuple variant of [`combine_options`]; first `None` wins.
pub trait OptionAll<V> {
    /// Returns `Some` of all values, or `None`.
    fn all(self) -> Option<V>;
}

/// Combines a tuple of options, preserving positional types.
pub fn all_options<V, T: OptionAll<V>>(tuple: T) -> Option<V> {
    tuple.all()
}

macro_rules! impl_option_all {
    ($($T:ident),+) => {
        impl<$($T,)+> OptionAll<($($T,)+)> for ($(Option<$T>,)+) {
            #[allow(non_snake_case)]
            fn all(self) -> Option<($($T,)+)> {
                let ($($T,)+) = self;
                Some(($($T?,)+))
            }
        }
    };
}

impl_option_all!(T1, T2);
impl_option_all!(T1, T2, T3);
impl_option_all!(T1, T2, T3, T4);
impl_option_all!(T1, T2, T3, T4, T5);
impl_option_all!(T1, T2, T3, T4, T5, T6);
