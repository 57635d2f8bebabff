use anyhow::anyhow;
use kubeship::cluster::http::HttpClusterClient;
use kubeship::report::report;
use kubeship::submit::provision_workload;
use kubeship_config::load_config;
use kubeship_config::shared::ProvisionerConfig;
use kubeship_telemetry::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Load and validate the provisioner config before anything else, so a
    // broken configuration aborts without a connection attempt.
    let config = load_provisioner_config()?;

    // Initialize tracing from the binary name.
    let _log_flusher = init_tracing(env!("CARGO_BIN_NAME"))?;

    // We start the runtime.
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main(config))?;

    Ok(())
}

/// Loads the [`ProvisionerConfig`] and validates it.
fn load_provisioner_config() -> anyhow::Result<ProvisionerConfig> {
    let config = load_config::<ProvisionerConfig>()?;
    config.validate()?;

    Ok(config)
}

async fn async_main(config: ProvisionerConfig) -> anyhow::Result<()> {
    info!(
        namespace = %config.cluster.namespace,
        deployment = %config.workload.deployment_name,
        service = %config.workload.service_name,
        image = %config.workload.image,
        replicas = config.workload.replicas,
        "starting provisioning run"
    );

    let client = HttpClusterClient::connect(&config.cluster).await?;

    let outcomes = provision_workload(&client, &config.workload).await?;

    if !report(&outcomes) {
        return Err(anyhow!(
            "provisioning failed: one or more resources were not created"
        ));
    }

    info!("provisioning run completed");

    Ok(())
}
