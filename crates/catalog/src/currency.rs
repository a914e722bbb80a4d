//! ISO-4217 currency codes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use planbook_core::{DomainError, ValueObject};

/// Three-letter, upper-case currency code (e.g. `USD`, `EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Currency {}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::validation(format!(
                "invalid currency code '{s}' (expected three upper-case letters)"
            )))
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upper_case_codes() {
        let usd: Currency = "USD".parse().unwrap();
        assert_eq!(usd.as_str(), "USD");
        assert_eq!(usd.to_string(), "USD");
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["usd", "US", "USDX", "U$D", ""] {
            let err = bad.parse::<Currency>().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("expected validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn serde_uses_plain_code_and_validates() {
        let eur: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(serde_json::to_string(&eur).unwrap(), "\"EUR\"");
        assert!(serde_json::from_str::<Currency>("\"eur\"").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any three upper-case letters parse and print back unchanged.
            #[test]
            fn upper_case_codes_round_trip(code in "[A-Z]{3}") {
                let currency: Currency = code.parse().unwrap();
                prop_assert_eq!(currency.to_string(), code);
            }

            /// Property: codes containing a lower-case letter are rejected.
            #[test]
            fn lower_case_codes_are_rejected(code in "[A-Z]{0,2}[a-z][A-Za-z]{0,2}") {
                prop_assert!(code.parse::<Currency>().is_err());
            }
        }
    }
}
