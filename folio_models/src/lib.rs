use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub mod contact;
pub mod email_address;

/// Wrapper for values that must never show up in logs or debug output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[sensitive]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_debug_is_redacted() {
        let key = Sensitive::from("SG.secret".to_owned());
        assert_eq!(format!("{key:?}"), "[sensitive]");
        assert_eq!(key.as_str(), "SG.secret");
    }

    #[test]
    fn sensitive_is_transparent() {
        let key: Sensitive<String> = serde_json::from_str("\"SG.secret\"").unwrap();
        assert_eq!(key, Sensitive("SG.secret".to_owned()));
    }
}
