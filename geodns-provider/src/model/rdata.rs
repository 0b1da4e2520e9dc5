use serde::{Deserialize, Serialize};

/// Type-safe representation of one rdata value.
///
/// Each variant carries the fields specific to that record type.
/// Use [`record_type()`](Self::record_type) to get the mnemonic, or the `Display`
/// impl for the zone-file presentation of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record: maps a hostname to an IPv4 address.
    A {
        /// IPv4 address (e.g., `"1.2.3.4"`).
        address: String,
    },

    /// AAAA record: maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address (e.g., `"2001:db8::1"`).
        address: String,
    },

    /// CNAME record: alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// MX record: mail exchange server.
    MX {
        /// Priority (lower = preferred).
        priority: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// TXT record: arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },

    /// NS record: authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// SRV record: service locator.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record: Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },

    /// SOA record: start of authority for a zone.
    SOA {
        /// Primary name server.
        mname: String,
        /// Responsible mailbox, encoded as a name.
        rname: String,
        /// Zone serial number.
        serial: u32,
        /// Secondary refresh interval in seconds.
        refresh: u32,
        /// Retry interval in seconds.
        retry: u32,
        /// Expiry in seconds.
        expire: u32,
        /// Negative caching TTL in seconds.
        minimum: u32,
    },
}

impl RecordData {
    /// Returns the mnemonic type of this rdata (e.g., `"CNAME"`).
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::A { .. } => "A",
            Self::AAAA { .. } => "AAAA",
            Self::CNAME { .. } => "CNAME",
            Self::MX { .. } => "MX",
            Self::TXT { .. } => "TXT",
            Self::NS { .. } => "NS",
            Self::SRV { .. } => "SRV",
            Self::CAA { .. } => "CAA",
            Self::SOA { .. } => "SOA",
        }
    }
}

impl std::fmt::Display for RecordData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A { address } | Self::AAAA { address } => write!(f, "{address}"),
            Self::CNAME { target } => write!(f, "{target}"),
            Self::MX { priority, exchange } => write!(f, "{priority} {exchange}"),
            Self::TXT { text } => write!(f, "{text}"),
            Self::NS { nameserver } => write!(f, "{nameserver}"),
            Self::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{priority} {weight} {port} {target}"),
            Self::CAA { flags, tag, value } => write!(f, "{flags} {tag} \"{value}\""),
            Self::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                f,
                "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}"
            ),
        }
    }
}
