use crate::di::AppContext;
use anyhow::Context;
use lancache_sync_domain::Config;
use tracing::{info, warn};

/// The whole sync pipeline: catalog → selection → aggregation → snapshot →
/// reconcile. Errors returned here map to a non-zero process exit.
pub async fn run(config: &Config, ctx: &AppContext) -> anyhow::Result<()> {
    let selection = config.sync.selection();

    if selection.is_empty() {
        // No services selected: enumerate what the catalog offers and stop.
        let catalog = ctx
            .list_source
            .fetch_catalog()
            .await
            .context("failed to enumerate available services")?;
        info!(
            services = %catalog.service_names().join(", "),
            "No service selection configured; available services listed"
        );
        info!("Set SERVICE_NAMES to one or more of the above, or ALL_SERVICES=true, to sync");
        return Ok(());
    }

    let catalog = ctx.list_source.fetch_catalog().await?;
    let file_paths = catalog.file_paths_for(&selection);
    if file_paths.is_empty() {
        anyhow::bail!("no domain-list files resolved for the selected services");
    }
    info!(files = file_paths.len(), "Resolved domain-list files");

    let desired = ctx
        .aggregate
        .execute(
            &file_paths,
            &config.sync.target_answer,
            config.sync.max_workers,
        )
        .await;
    if desired.is_empty() {
        anyhow::bail!("aggregation produced no rewrite entries");
    }

    if let Some(snapshot) = &ctx.snapshot {
        if let Err(e) = snapshot.persist(&desired).await {
            warn!(error = %e, "Failed to write desired-state snapshot");
        }
    }

    let summary = ctx.reconcile.execute(&desired).await?;
    info!(
        added = summary.added,
        updated = summary.updated,
        skipped = summary.skipped,
        failed = summary.failed,
        "Rewrite sync finished"
    );
    Ok(())
}
