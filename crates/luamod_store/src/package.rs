//! Portable module bundles: bincode-encoded `(path, source)` entries,
//! zlib-compressed into a single blob for distribution.
//!
//! Unpacking rebuilds modules from the source text captured at pack time,
//! so a bundle stays valid even when the original files have changed or no
//! longer exist.

use std::io::{Read, Write};
use std::path::PathBuf;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use luamod_core::Module;
use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};

#[derive(Serialize, Deserialize)]
struct PackedModule {
    path: PathBuf,
    source: String,
}

/// Serialize `modules` into one compressed blob embedding each module's
/// path and source text.
pub fn pack(modules: &[Module]) -> StoreResult<Vec<u8>> {
    let entries: Vec<PackedModule> = modules
        .iter()
        .map(|module| PackedModule {
            path: module.path().to_path_buf(),
            source: module.source().to_owned(),
        })
        .collect();
    let encoded = bincode::serialize(&entries)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&encoded)
        .map_err(StoreError::Compression)?;
    let blob = encoder.finish().map_err(StoreError::Compression)?;
    tracing::debug!(
        modules = modules.len(),
        bytes = blob.len(),
        "packed module bundle"
    );
    Ok(blob)
}

/// Decompress and decode a bundle, reconstructing one module per entry
/// from its embedded source (no filesystem access).
pub fn unpack(data: &[u8]) -> StoreResult<Vec<Module>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decoded = Vec::new();
    decoder
        .read_to_end(&mut decoded)
        .map_err(StoreError::Compression)?;

    let entries: Vec<PackedModule> = bincode::deserialize(&decoded)?;
    Ok(entries
        .into_iter()
        .map(|entry| Module::from_parts(entry.path, entry.source))
        .collect())
}

/// Whether `data` decompresses and decodes as a valid module bundle.
pub fn verify(data: &[u8]) -> bool {
    unpack(data).is_ok()
}
