//! Serde support.
//!
//! CIDs serialize as their canonical string, content hashes as `0x` hex.

use crate::error::{ContentHashError, Result};
use crate::types::{Cid, ContentHash, Multihash, Namespace};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl Serialize for ContentHash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContentHash::from_hex(&s).map_err(D::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct MultihashRepr {
    code: u64,
    digest: String,
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MultihashRepr {
            code: self.code(),
            digest: hex::encode(self.digest()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MultihashRepr::deserialize(deserializer)?;
        let digest = hex::decode(&repr.digest).map_err(D::Error::custom)?;
        Ok(Multihash::wrap(repr.code, digest))
    }
}

impl Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "ipfs" => Ok(Namespace::Ipfs),
            "ipns" => Ok(Namespace::Ipns),
            other => Err(D::Error::unknown_variant(other, &["ipfs", "ipns"])),
        }
    }
}

impl Cid {
    /// Serialize to a JSON string literal
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ContentHashError::Serialization(e.to_string()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| ContentHashError::Deserialization(e.to_string()))
    }
}

impl ContentHash {
    /// Serialize to a JSON string literal
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ContentHashError::Serialization(e.to_string()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| ContentHashError::Deserialization(e.to_string()))
    }
}
