use crate::{
    core::{
        config::ProvisionerConfig,
        errors::AppResult,
        types::{CatalogEntry, ProvisionSummary},
    },
    provisioner::{AssetProducer, Provisioner},
};

/// Builds the producers from `config` and provisions `catalog` into
/// `config.output_dir`.
pub async fn provision(
    config: &ProvisionerConfig,
    catalog: &[CatalogEntry],
) -> AppResult<ProvisionSummary> {
    let producer = AssetProducer::from_config(config)?;
    let provisioner = Provisioner::new(producer, config.output_dir.clone(), config.fetch_delay);
    provisioner.run(catalog).await
}
