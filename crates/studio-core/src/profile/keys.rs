//! Cache keys for profile queries.

use crate::query::QueryKey;

pub fn mfa_factors() -> QueryKey {
    QueryKey::new(["profile", "mfa", "factors"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mfa_factors_key() {
        assert_eq!(mfa_factors().to_string(), "[profile, mfa, factors]");
        assert_eq!(mfa_factors(), mfa_factors());
    }
}
