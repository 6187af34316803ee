/// Assert that an expression matches a pattern, optionally with a guard.
///
/// The failure message includes the debug representation of the value.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            ref other => ::core::panic!(
                "assertion failed: `{:?}` does not match `{}`",
                other,
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}
