//! The validated input of one scaffolding run.
//!
//! A [`ScaffoldRequest`] can only be built from a [`ServiceName`] and a
//! [`Port`], and both of those only exist after their text has been checked.
//! Templates therefore never see raw command-line strings.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::DomainError;

/// Name of the service being created.
///
/// Used verbatim as the directory name under the services root and as the
/// stem of the package name (`<name>-service`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidServiceName {
            name: raw.into(),
            reason: reason.into(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if raw.trim() != raw {
            return Err(invalid("name cannot start or end with whitespace"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("name must be a directory name"));
        }
        if raw.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package name used in `package.json` and `pnpm --filter`.
    pub fn package_name(&self) -> String {
        format!("{}-service", self.0)
    }
}

impl FromStr for ServiceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port the generated service listens on.
///
/// Kept as canonical integer text: any integer literal is accepted,
/// however large, and the range is the generated service's concern.
/// Underscores between digits are allowed (`3_003`); a `+` sign and
/// leading zeros are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port(String);

impl Port {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidPort { value: raw.into() };

        let text = raw.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let well_formed = !body.is_empty()
            && !body.starts_with('_')
            && !body.ends_with('_')
            && !body.contains("__")
            && body.chars().all(|c| c.is_ascii_digit() || c == '_');
        if !well_formed {
            return Err(invalid());
        }

        let digits: String = body.chars().filter(|c| *c != '_').collect();
        let digits = digits.trim_start_matches('0');
        let canonical = match (digits.is_empty(), negative) {
            (true, _) => "0".to_owned(),
            (false, true) => format!("-{digits}"),
            (false, false) => digits.to_owned(),
        };

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl FromStr for Port {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON number when it fits, string otherwise.
impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

/// Everything a template needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldRequest {
    service_name: ServiceName,
    port: Port,
}

impl ScaffoldRequest {
    pub fn new(service_name: ServiceName, port: Port) -> Self {
        Self { service_name, port }
    }

    /// Validate raw command-line text. The name is checked before the port.
    pub fn parse(service_name: &str, port: &str) -> Result<Self, DomainError> {
        Ok(Self::new(ServiceName::parse(service_name)?, Port::parse(port)?))
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn port(&self) -> &Port {
        &self.port
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (port {})", self.service_name, self.port)
    }
}
