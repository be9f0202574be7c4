use serde::{Deserialize, Serialize};

/// Configuration for the users_registry module (`modules.users_registry`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersRegistryConfig {
    /// Minimum age in whole years; there is no default.
    pub min_age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn min_age_is_required() {
        assert!(serde_json::from_value::<UsersRegistryConfig>(json!({})).is_err());
        let cfg: UsersRegistryConfig = serde_json::from_value(json!({ "min_age": 18 })).unwrap();
        assert_eq!(cfg.min_age, 18);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = serde_json::from_value::<UsersRegistryConfig>(json!({ "min_age": 18, "max_age": 99 }));
        assert!(res.is_err());
    }
}
