use serde::{Deserialize, Serialize};

/// Boolean that may be unknown: JSON `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerBool(Option<bool>);

impl PointerBool {
    pub const UNKNOWN: Self = Self(None);

    #[must_use]
    pub const fn known(value: bool) -> Self {
        Self(Some(value))
    }

    #[must_use]
    pub const fn get(self) -> Option<bool> {
        self.0
    }

    #[must_use]
    pub const fn is_true(self) -> bool {
        matches!(self.0, Some(true))
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<bool>> for PointerBool {
    fn from(value: Option<bool>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::PointerBool;

    #[test]
    fn null_decodes_as_unknown() {
        let value: PointerBool = serde_json::from_str("null").expect("null");
        assert!(value.is_unknown());
        assert!(!value.is_true());
    }

    #[test]
    fn explicit_false_is_known() {
        let value: PointerBool = serde_json::from_str("false").expect("false");
        assert_eq!(value, PointerBool::known(false));
        assert!(!value.is_unknown());
    }
}
