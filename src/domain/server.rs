//! Managed server records.
//!
//! A [`ServerRecord`] pairs a caller-chosen [`ServerName`] with the
//! [`ServerAddress`] of the agent running on that server. Both types can
//! only be built through their validating constructors, so any record held
//! by the registry is well-formed.

use std::borrow::Borrow;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::RegistryError;

/// Unique, case-sensitive server identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerName(String);

impl ServerName {
    /// Validate a raw name.
    ///
    /// Names arrive as whitespace-delimited command arguments, so they must
    /// be non-empty and free of whitespace.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        if raw.is_empty() {
            return Err(RegistryError::InvalidName {
                name: raw.to_string(),
                reason: "name must not be empty",
            });
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName {
                name: raw.to_string(),
                reason: "name must not contain whitespace",
            });
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ServerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `host:port` pair, kept in the exact form the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerAddress(String);

impl ServerAddress {
    /// Parse and validate `host:port`.
    ///
    /// IPv6 hosts must be bracketed (`[::1]:8080`). A host whose last label
    /// looks numeric must be a dotted-quad IPv4 address, since URL parsers
    /// would otherwise reinterpret it (`1.2.3` as `1.2.0.3`). Ports must be
    /// decimal digits in `1..=65535`.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidAddress {
            address: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("address must not contain whitespace"));
        }

        let (host, port) = raw
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected host:port"))?;

        if let Some(inner) = host.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| invalid("unterminated IPv6 bracket"))?;
            inner
                .parse::<Ipv6Addr>()
                .map_err(|_| invalid("bracketed host is not an IPv6 address"))?;
        } else {
            if host.is_empty() {
                return Err(invalid("missing host"));
            }
            if host.contains(':') {
                return Err(invalid("IPv6 hosts must be bracketed"));
            }
            let valid_host = host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
            if !valid_host {
                return Err(invalid("host contains invalid characters"));
            }
            if host.split('.').any(str::is_empty) {
                return Err(invalid("host has an empty label"));
            }
            if looks_numeric(host) && host.parse::<Ipv4Addr>().is_err() {
                return Err(invalid("numeric host is not an IPv4 address"));
            }
        }

        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("port must be numeric"));
        }
        if !matches!(port.parse::<u16>(), Ok(1..=65535)) {
            return Err(invalid("port must be between 1 and 65535"));
        }

        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whether the last label would be read as a number by a URL host parser.
fn looks_numeric(host: &str) -> bool {
    let last = host.rsplit('.').next().unwrap_or(host);
    let is_hex = last
        .strip_prefix("0x")
        .or_else(|| last.strip_prefix("0X"))
        .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()));
    is_hex || last.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    pub name: ServerName,
    pub address: ServerAddress,
}

impl ServerRecord {
    #[must_use]
    pub const fn new(name: ServerName, address: ServerAddress) -> Self {
        Self { name, address }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ipv4_address() {
        let address = ServerAddress::parse("10.0.0.5:5432").unwrap();
        assert_eq!(address.as_str(), "10.0.0.5:5432");
        assert_eq!(address.to_string(), "10.0.0.5:5432");
    }

    #[test]
    fn parse_hostname_address() {
        let address = ServerAddress::parse("build-box.internal:8080").unwrap();
        assert_eq!(address.as_str(), "build-box.internal:8080");
    }

    #[test]
    fn parse_hostname_with_digit_labels() {
        for raw in ["web01:80", "1password.example:443", "node-7.rack3:22", "0xide.dev:80"] {
            assert!(ServerAddress::parse(raw).is_ok(), "expected `{raw}` to parse");
        }
    }

    #[test]
    fn parse_bracketed_ipv6_address() {
        let address = ServerAddress::parse("[::1]:9000").unwrap();
        assert_eq!(address.as_str(), "[::1]:9000");
    }

    #[test]
    fn reject_malformed_addresses() {
        let invalid = [
            "",
            "10.0.0.5",
            ":8080",
            "10.0.0.5:",
            "10.0.0.5:http",
            "10.0.0.5:+80",
            "10.0.0.5:0",
            "10.0.0.5:70000",
            "::1:8080",
            "[::1:8080",
            "[nope]:8080",
            "host name:80",
            "user@host:22",
            "http://host:80",
            "999.0.0.1:80",
            "1.2.3:80",
            "0x7f.1:80",
            "10.0.0.5.:80",
            "010.0.0.1:80",
            "2130706433:80",
            "a..b:80",
            ".host:80",
        ];

        for raw in invalid {
            assert!(
                matches!(
                    ServerAddress::parse(raw),
                    Err(RegistryError::InvalidAddress { .. })
                ),
                "expected InvalidAddress for `{raw}`"
            );
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        let lower = ServerName::parse("db1").unwrap();
        let upper = ServerName::parse("DB1").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn reject_empty_or_spaced_names() {
        assert!(matches!(
            ServerName::parse(""),
            Err(RegistryError::InvalidName { .. })
        ));
        assert!(matches!(
            ServerName::parse("db 1"),
            Err(RegistryError::InvalidName { .. })
        ));
    }
}
