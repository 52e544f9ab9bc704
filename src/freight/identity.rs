use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of producer that emitted a freight reference.
///
/// `Warehouse` is the only kind the controller produces today; `Other`
/// preserves kinds introduced by newer controllers instead of rejecting them.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum OriginKind {
    Warehouse,
    Other(String),
}

/// Producer identity of a freight reference (e.g. `Warehouse/my-warehouse`).
///
/// Used both as the upsert key of a [`FreightCollection`](crate::FreightCollection)
/// and as the origin selector in update declarations.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct FreightOrigin {
    pub kind: OriginKind,
    pub name: String,
}

impl FreightOrigin {
    pub fn warehouse(name: impl Into<String>) -> Self {
        Self {
            kind: OriginKind::Warehouse,
            name: name.into(),
        }
    }

    /// Collection key, `Kind/name`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FreightOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.as_str(), self.name)
    }
}

impl Serialize for OriginKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OriginKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

impl OriginKind {
    pub fn as_str(&self) -> &str {
        match self {
            OriginKind::Warehouse => "Warehouse",
            OriginKind::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "Warehouse" => OriginKind::Warehouse,
            other => OriginKind::Other(other.to_string()),
        }
    }
}
