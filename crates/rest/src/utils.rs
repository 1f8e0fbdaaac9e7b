//! Helper macros shared by the crate internals.

/// Returns early with `Err($error)` when `$predicate` does not hold.
///
/// Works like `assert!`, but hands the error back to the caller instead of
/// panicking, which keeps value construction and request checks `?`-friendly.
///
/// ```ignore
/// ensure!(!value.is_empty(), InvalidValue::format(value));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
