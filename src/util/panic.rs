// Asserts that the provided block panics when run. catch_unwind requires the closure to be
// unwind safe, so any state the block mutates must be built inside the block itself.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "Expected the block to panic!")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ The panic above was expected.");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
