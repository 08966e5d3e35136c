//! Assertion helpers for testing

/// Assert that a file exists
#[macro_export]
macro_rules! assert_file_exists {
    ($path:expr) => {
        assert!($path.exists(), "File should exist: {}", $path.display());
    };
}

/// Assert that a result failed with the given `QuickstandError` variant
#[macro_export]
macro_rules! assert_quickstand_err {
    ($result:expr, $variant:ident) => {
        match $result {
            Err(quickstand::QuickstandError::$variant { .. }) => {}
            other => panic!(
                "Expected {} error, got {:?}",
                stringify!($variant),
                other
            ),
        }
    };
}
