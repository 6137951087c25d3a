use crate::model::catalog::Catalog;
use bincode::Options;

// Deserialization limit for the binary cache. The catalog is a few thousand
// records at most; anything near this limit is a corrupt or hostile file.
const CACHE_BYTE_LIMIT: u64 = 64 * 1024 * 1024;

impl Catalog {
    /// Reconstructs the catalog from its serialized binary cache format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_BYTE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
    }

    /// Serializes the catalog into the binary cache format read back by
    /// [`Catalog::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_BYTE_LIMIT)
            .allow_trailing_bytes()
            .serialize(self)
    }
}
