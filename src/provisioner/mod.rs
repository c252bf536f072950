//! The asset provisioner: walks a catalog one entry at a time, asks an
//! [`ImageProducer`] for each image, and records provenance for the ones that
//! made it to disk.

pub mod producers;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::{
    catalog::validate_catalog,
    core::{
        config::PROVENANCE_FILE,
        errors::AppResult,
        types::{size_kb, CatalogEntry, ProvenanceMap, ProvenanceRecord, ProvisionSummary},
    },
};

pub use producers::{AssetProducer, RemoteFetcher, Synthesizer};

/// Produces one catalog entry's image at `dest`.
///
/// On success the file at `dest` is complete and the returned string is the
/// provenance `source`. On failure nothing is left at `dest` by this attempt.
#[allow(async_fn_in_trait)]
pub trait ImageProducer {
    async fn produce(&self, entry: &CatalogEntry, dest: &Path) -> AppResult<String>;
}

pub struct Provisioner<P> {
    producer: P,
    output_dir: PathBuf,
    fetch_delay: Duration,
}

impl<P: ImageProducer> Provisioner<P> {
    pub fn new(producer: P, output_dir: impl Into<PathBuf>, fetch_delay: Duration) -> Self {
        Self {
            producer,
            output_dir: output_dir.into(),
            fetch_delay,
        }
    }

    /// Runs the whole catalog. Per-entry failures are logged and skipped; only
    /// an invalid catalog or an unusable output directory is returned as an
    /// error.
    pub async fn run(&self, catalog: &[CatalogEntry]) -> AppResult<ProvisionSummary> {
        validate_catalog(catalog)?;
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut records = ProvenanceMap::new();
        let mut failed = Vec::new();

        for (idx, entry) in catalog.iter().enumerate() {
            let dest = self.output_dir.join(&entry.id);
            info!(entry = %entry.id, kind = entry.source.kind(), "provisioning");
            match self.provision_one(entry, &dest).await {
                Ok(record) => {
                    info!(entry = %entry.id, size_kb = record.size_kb, "created {} ({:.1} KB)", entry.id, record.size_kb);
                    records.insert(entry.id.clone(), record);
                }
                Err(err) => {
                    warn!(
                        entry = %entry.id,
                        code = err.code(),
                        network = err.is_network(),
                        "failed {}: {err}",
                        entry.id
                    );
                    failed.push(entry.id.clone());
                }
            }

            let more_to_go = idx + 1 < catalog.len();
            if entry.source.is_remote() && more_to_go && !self.fetch_delay.is_zero() {
                tokio::time::sleep(self.fetch_delay).await;
            }
        }

        let provenance_path = write_provenance(&self.output_dir, &records)?;
        info!(
            produced = records.len(),
            failed = failed.len(),
            path = %provenance_path.display(),
            "provenance written"
        );

        Ok(ProvisionSummary {
            attempted: catalog.len(),
            produced: records.len(),
            failed,
            provenance_path,
            records,
        })
    }

    async fn provision_one(&self, entry: &CatalogEntry, dest: &Path) -> AppResult<ProvenanceRecord> {
        let source = self.producer.produce(entry, dest).await?;
        let bytes = tokio::fs::metadata(dest).await?.len();
        Ok(ProvenanceRecord {
            source,
            license: entry.license.clone(),
            description: entry.description.clone(),
            size_kb: size_kb(bytes),
        })
    }
}

/// Replaces `sources.json` in `output_dir` with `records`.
pub fn write_provenance(output_dir: &Path, records: &ProvenanceMap) -> AppResult<PathBuf> {
    let path = output_dir.join(PROVENANCE_FILE);
    let body = serde_json::to_string_pretty(records)?;
    std::fs::write(&path, body)?;
    Ok(path)
}
