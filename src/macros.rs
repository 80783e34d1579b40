//! # Assertion Macros / 断言宏
//!
//! Every assertion macro captures the call site (`file!()`, `line!()`) and the literal
//! source text of its condition, then records it on the harness. `tap_assert!` and its
//! `_eq` variants `return` from the enclosing test body on failure, so the first failed
//! assertion ends that body and only that body. `tap_check!` does the same through `?`
//! for bodies that return a `Result`.
//!
//! 每个断言宏都会捕获调用位置和条件的源代码文本，然后记录到测试框架中。
//! 断言失败时，`tap_assert!` 及其变体会从所在的测试函数返回。

/// Records `cond` under `msg` and returns from the enclosing function if it is false.
///
/// ```
/// use tap_harness::{Harness, HarnessConfig, tap_assert};
///
/// fn test_sheep(h: &mut Harness<Vec<u8>>) {
///     tap_assert!(h, "sheep have legs", 4 > 0);
///     tap_assert!(h, "sheep fly", 1 == 2);
///     unreachable!();
/// }
///
/// let mut h = Harness::with_writer(HarnessConfig::plain(), Vec::new());
/// h.execute("test_sheep", test_sheep);
/// assert_eq!(h.state().fail_count(), 1);
/// ```
#[macro_export]
macro_rules! tap_assert {
    ($harness:expr, $msg:expr, $cond:expr $(,)?) => {{
        let passed: bool = $cond;
        if !$harness.record(
            file!(),
            line!(),
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            stringify!($cond),
            passed,
        ) {
            return;
        }
    }};
}

/// `tap_assert!` on `expected == actual`, using the text of `actual` as the message.
///
/// The expression line reads `(expected) == (actual)`, each side parenthesized.
#[macro_export]
macro_rules! tap_assert_eq {
    ($harness:expr, $expected:expr, $actual:expr $(,)?) => {{
        let passed: bool = ($expected) == ($actual);
        if !$harness.record(
            file!(),
            line!(),
            stringify!($actual),
            concat!("(", stringify!($expected), ") == (", stringify!($actual), ")"),
            passed,
        ) {
            return;
        }
    }};
}

/// String equality. Accepts anything that is `AsRef<str>` on either side.
#[macro_export]
macro_rules! tap_assert_str_eq {
    ($harness:expr, $expected:expr, $actual:expr $(,)?) => {{
        let passed: bool = ::core::convert::AsRef::<str>::as_ref(&$expected)
            == ::core::convert::AsRef::<str>::as_ref(&$actual);
        if !$harness.record(
            file!(),
            line!(),
            stringify!($actual),
            concat!("(", stringify!($expected), ") == (", stringify!($actual), ")"),
            passed,
        ) {
            return;
        }
    }};
}

/// Records `cond` and propagates an [`AssertionFailed`](crate::AssertionFailed) with `?`.
///
/// ```
/// use tap_harness::{AssertionFailed, Harness, HarnessConfig, tap_check};
///
/// fn test_cheese(h: &mut Harness<Vec<u8>>) -> Result<(), AssertionFailed> {
///     tap_check!(h, "cheese is tangy", 3 > 0);
///     Ok(())
/// }
///
/// let mut h = Harness::with_writer(HarnessConfig::plain(), Vec::new());
/// h.execute("test_cheese", test_cheese);
/// assert_eq!(h.state().pass_count(), 1);
/// ```
#[macro_export]
macro_rules! tap_check {
    ($harness:expr, $msg:expr, $cond:expr $(,)?) => {{
        let passed: bool = $cond;
        $harness.check(
            file!(),
            line!(),
            ::core::convert::AsRef::<str>::as_ref(&$msg),
            stringify!($cond),
            passed,
        )?
    }};
}

/// Executes a test function, naming it after its own path.
#[macro_export]
macro_rules! tap_run {
    ($harness:expr, $test:path $(,)?) => {
        $harness.execute(stringify!($test), $test)
    };
}
