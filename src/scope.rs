use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// OAuth scopes accepted by the authorization server.
///
/// Serialized on the wire as a space-joined list of the lowercase names
/// (`"profile history offline_access"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Profile,
    History,
    HistoryLite,
    OfflineAccess,
    Places,
    Request,
    RequestReceipt,
    AllTrips,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Profile => "profile",
            Scope::History => "history",
            Scope::HistoryLite => "history_lite",
            Scope::OfflineAccess => "offline_access",
            Scope::Places => "places",
            Scope::Request => "request",
            Scope::RequestReceipt => "request_receipt",
            Scope::AllTrips => "all_trips",
        }
    }

    /// Join scopes into the wire form. Empty slice yields the empty string.
    pub fn join(scopes: &[Scope]) -> String {
        scopes.iter().map(Scope::as_str).collect::<Vec<_>>().join(" ")
    }

    /// Parse a space-joined scope string as returned by the token endpoint.
    /// Unknown scope names are rejected.
    pub fn parse_list(s: &str) -> Result<Vec<Scope>, Error> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(Scope::Profile),
            "history" => Ok(Scope::History),
            "history_lite" => Ok(Scope::HistoryLite),
            "offline_access" => Ok(Scope::OfflineAccess),
            "places" => Ok(Scope::Places),
            "request" => Ok(Scope::Request),
            "request_receipt" => Ok(Scope::RequestReceipt),
            "all_trips" => Ok(Scope::AllTrips),
            other => Err(Error::invalid(format!("unknown scope: {other}"))),
        }
    }
}
