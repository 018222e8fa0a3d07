
mod codepoint_ranges;
mod property_roundtrip;

/// QuickCheck iteration count, scaled up on CI and down under miri.
fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;

    tests
}
