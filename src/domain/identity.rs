//! Caller identities and the authorized set.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ConfigError, Unauthorized};

/// Numeric identifier of the user issuing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallerId(u64);

impl CallerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of callers allowed to issue commands.
///
/// Never empty; construction fails on an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedCallers {
    ids: BTreeSet<CallerId>,
}

impl AuthorizedCallers {
    /// Build the set from already-parsed identities.
    pub fn new(ids: impl IntoIterator<Item = CallerId>) -> Result<Self, ConfigError> {
        let ids: BTreeSet<_> = ids.into_iter().collect();
        if ids.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "AUTHORIZED_USER_IDS",
                reason: "at least one authorized user id is required".into(),
            });
        }
        Ok(Self { ids })
    }

    /// Parse a comma-separated list of numeric ids, e.g. `"123, 456"`.
    ///
    /// Blank entries are skipped; any other non-numeric entry fails the
    /// whole list.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .parse::<u64>()
                    .map(CallerId::new)
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "AUTHORIZED_USER_IDS",
                        reason: format!("`{entry}` is not a numeric user id"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(ids)
    }

    /// Check one caller against the set.
    pub fn authorize(&self, caller: CallerId) -> Result<(), Unauthorized> {
        if self.ids.contains(&caller) {
            Ok(())
        } else {
            Err(Unauthorized(caller))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_separated_ids() {
        let callers = AuthorizedCallers::parse("123, 456,789").unwrap();
        assert_eq!(callers.len(), 3);
        assert!(callers.authorize(CallerId::new(456)).is_ok());
    }

    #[test]
    fn parse_skips_blank_entries() {
        let callers = AuthorizedCallers::parse(" 42 ,, ").unwrap();
        assert_eq!(callers.len(), 1);
        assert!(callers.authorize(CallerId::new(42)).is_ok());
    }

    #[test]
    fn parse_rejects_empty_list() {
        for raw in ["", "   ", ",,"] {
            assert!(
                matches!(
                    AuthorizedCallers::parse(raw),
                    Err(ConfigError::InvalidValue {
                        field: "AUTHORIZED_USER_IDS",
                        ..
                    })
                ),
                "expected `{raw}` to be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_non_numeric_entry() {
        let err = AuthorizedCallers::parse("123,abc").unwrap_err();
        assert!(err.to_string().contains("`abc`"));
    }

    #[test]
    fn parse_rejects_negative_ids() {
        assert!(AuthorizedCallers::parse("-5").is_err());
    }

    #[test]
    fn authorize_rejects_unknown_caller() {
        let callers = AuthorizedCallers::parse("1").unwrap();
        assert_eq!(
            callers.authorize(CallerId::new(2)),
            Err(Unauthorized(CallerId::new(2)))
        );
    }
}
