//! Conversions to and from the `cid` crate.

use crate::error::{ContentHashError, Result};
use crate::types::{Cid, Multihash, Version};

/// Max digest size supported by `cid::Cid`
const IPLD_DIGEST_SIZE: usize = 64;

impl TryFrom<&Cid> for cid::Cid {
    type Error = ContentHashError;

    fn try_from(value: &Cid) -> Result<Self> {
        let mh = multihash::Multihash::<IPLD_DIGEST_SIZE>::wrap(
            value.hash().code(),
            value.hash().digest(),
        )
        .map_err(|e| ContentHashError::InvalidCid(e.to_string()))?;

        match value.version() {
            Version::V0 => {
                cid::Cid::new_v0(mh).map_err(|e| ContentHashError::InvalidCid(e.to_string()))
            }
            Version::V1 => Ok(cid::Cid::new_v1(value.codec(), mh)),
        }
    }
}

impl TryFrom<&cid::Cid> for Cid {
    type Error = ContentHashError;

    fn try_from(value: &cid::Cid) -> Result<Self> {
        let hash = Multihash::wrap(value.hash().code(), value.hash().digest());
        match value.version() {
            cid::Version::V0 => Cid::new_v0(hash),
            cid::Version::V1 => Ok(Cid::new_v1(value.codec(), hash)),
        }
    }
}
