#[cfg(any(test, not(feature = "std")))]
pub(crate) mod libm;
