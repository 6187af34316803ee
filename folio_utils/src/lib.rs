pub mod macros;

/// Returns the version string reported by the CLI and sent in the `User-Agent`
/// header of outgoing HTTP requests.
pub const fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn prefix(name: String, title: Option<&str>) -> String {
    ///     name.apply_map(title, |name, title| format!("{title} {name}"))
    /// }
    /// assert_eq!(prefix("Lovelace".into(), None), "Lovelace");
    /// assert_eq!(prefix("Lovelace".into(), Some("Countess")), "Countess Lovelace");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_map_none_is_identity() {
        assert_eq!(1_i32.apply_map(None::<i32>, |x, y| x + y), 1);
        assert_eq!(1_i32.apply_map(Some(2), |x, y| x + y), 3);
    }

    #[test]
    fn assert_matches_with_guard() {
        let result: Result<u16, ()> = Ok(400);
        crate::assert_matches!(result, Ok(status) if status == 400);
    }

    #[test]
    #[should_panic(expected = "does not match `Err(_)`")]
    fn assert_matches_reports_value() {
        crate::assert_matches!(Ok::<u16, ()>(200), Err(_));
    }
}
