/// Asserts that running `$run` panics. The block is treated as unwind safe, so it may borrow the
/// collection under test mutably.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected the block to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
