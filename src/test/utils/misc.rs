/// `panic!()` that reads as an assertion outcome within a `match`.
macro_rules! fail {
    ( $($arg:tt)* ) => {
        panic!($($arg)*)
    };
}
pub(crate) use fail;
