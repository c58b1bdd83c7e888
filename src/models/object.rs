//! Represents an object accepted by the ingestion pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A named storage class. Purely a label inside the core; the cost and
/// latency figures are nominal and only reported back to clients.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hot,
    #[default]
    Warm,
    Cold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Hot, Tier::Warm, Tier::Cold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Hot => "hot",
            Tier::Warm => "warm",
            Tier::Cold => "cold",
        }
    }

    /// Nominal cost in USD per GB-month.
    pub fn cost_per_gb(&self) -> f64 {
        match self {
            Tier::Hot => 0.023,
            Tier::Warm => 0.010,
            Tier::Cold => 0.004,
        }
    }

    /// Nominal time to first byte, in milliseconds.
    pub fn retrieval_ms(&self) -> u64 {
        match self {
            Tier::Hot => 10,
            Tier::Warm => 100,
            Tier::Cold => 1000,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// Where the copies of one object live.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReplicationMap {
    /// Region holding the primary copy.
    pub primary: String,

    /// Backup regions, in pool order.
    pub replicas: Vec<String>,
}

/// Metadata for a single accepted object.
///
/// The raw bytes are dropped once ingestion finishes; only sizes, the
/// fingerprint and placement are kept.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ObjectRecord {
    /// Monotonic identifier, starting at 1 and never reused.
    pub id: u64,

    /// Sanitized display name.
    pub name: String,

    /// Hex SHA-256 of the original bytes. Unique across the catalog.
    pub fingerprint: String,

    pub original_size: u64,

    pub compressed_size: u64,

    /// Percentage saved by compression; negative for inputs that grew.
    pub compression_ratio: f64,

    pub tier: Tier,

    /// Total number of copies (one primary plus backups).
    pub redundancy: u32,

    pub replication_map: ReplicationMap,

    /// Number of reads served for this object.
    pub access_count: u64,

    pub upload_time: DateTime<Utc>,
}
