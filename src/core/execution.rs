//! # Suite Execution Module / 测试套件执行模块
//!
//! Runs named test bodies against a [`Harness`]. The executor only sets up
//! attribution and calls the body; stopping a body at its first failed assertion
//! happens at the assertion call site (`tap_assert!` returns, `tap_check!` uses `?`).
//!
//! 针对 [`Harness`] 运行具名测试函数。执行器只负责设置归属并调用测试函数；
//! 在第一个失败断言处停止测试函数是在断言调用处完成的。

use std::io::{Stdout, Write};

use crate::core::harness::{Harness, log_write_error};

/// What a test body may return.
///
/// `()` for bodies using `tap_assert!`, `Result<(), E>` for bodies using `tap_check!`
/// or `?`, and `bool` for bodies that hand back the result of their last `record`.
pub trait TestOutcome {
    /// `true` when the body ran to completion rather than bailing out.
    fn is_success(&self) -> bool;
}

impl TestOutcome for () {
    fn is_success(&self) -> bool {
        true
    }
}

impl TestOutcome for bool {
    fn is_success(&self) -> bool {
        *self
    }
}

impl<E> TestOutcome for Result<(), E> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }
}

impl<W: Write> Harness<W> {
    /// Executes one named test body.
    ///
    /// Writes `# <name>` (never silenced), attributes every assertion made by the
    /// body to `name`, then puts the previous attribution back once the body returns.
    /// A body that fails does not affect later calls.
    ///
    /// 执行一个具名测试函数。写入 `# <name>`（永不静默），将测试函数中的所有断言
    /// 归属于 `name`，并在测试函数返回后恢复之前的归属。
    pub fn execute<F, O>(&mut self, name: &str, body: F)
    where
        F: FnOnce(&mut Self) -> O,
        O: TestOutcome,
    {
        let previous = self.state.enter_test(name);
        let written = self.formatter.write_suite_start(&mut self.out, name);
        log_write_error(written, "suite start");

        let failures_before = self.state.fail_count();
        let outcome = body(self);
        let clean = outcome.is_success() && self.state.fail_count() == failures_before;
        tracing::debug!(test = name, clean, "test finished");

        self.state.restore_test(previous);
    }
}

type TestBody<W> = Box<dyn Fn(&mut Harness<W>) -> bool>;

/// An ordered list of named test bodies, run against one harness and reported once.
///
/// 一个有序的具名测试函数列表，针对同一个测试框架运行并只报告一次。
///
/// # Example / 示例
/// ```
/// use tap_harness::{Harness, HarnessConfig, TestSuite, tap_assert};
///
/// fn test_math(h: &mut Harness<Vec<u8>>) {
///     tap_assert!(h, "2 + 2 = 4", 2 + 2 == 4);
/// }
///
/// let mut harness = Harness::with_writer(HarnessConfig::plain(), Vec::new());
/// let code = TestSuite::new().test("test_math", test_math).run(&mut harness);
/// assert_eq!(code, 0);
/// ```
pub struct TestSuite<W: Write + 'static = Stdout> {
    tests: Vec<(String, TestBody<W>)>,
}

impl<W: Write + 'static> Default for TestSuite<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + 'static> TestSuite<W> {
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// Registers a test body under `name`. Bodies run in registration order.
    pub fn test<F, O>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Harness<W>) -> O + 'static,
        O: TestOutcome,
    {
        let body: TestBody<W> = Box::new(move |h: &mut Harness<W>| body(h).is_success());
        self.tests.push((name.into(), body));
        self
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(|(name, _)| name.as_str())
    }

    /// Executes every registered body, then reports and returns the exit code.
    pub fn run(&self, harness: &mut Harness<W>) -> i32 {
        for (name, body) in &self.tests {
            harness.execute(name, |h| body(h));
        }
        harness.report()
    }
}
