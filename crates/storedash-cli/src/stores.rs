//! Command handlers for the store dashboard.

use storedash_provisioner::ProvisionerClient;

use crate::render;
use crate::view::StoreListView;

/// Refresh the view and print the store table.
///
/// # Errors
///
/// Returns an error if the list request fails.
pub(crate) async fn run_list(view: &mut StoreListView) -> anyhow::Result<()> {
    view.refresh().await?;
    println!("{}", render::render_store_table(view.stores()));
    Ok(())
}

/// Provision a new store, then print the refreshed table.
///
/// # Errors
///
/// Returns an error if the create or the subsequent refresh fails.
pub(crate) async fn run_create(view: &mut StoreListView) -> anyhow::Result<()> {
    let record = view.create().await?;
    println!("provisioned {} ({})", record.store_id, record.status);
    println!();
    println!("{}", render::render_store_table(view.stores()));
    Ok(())
}

/// Delete a store by id, then print the refreshed table.
///
/// # Errors
///
/// Returns an error if the delete or the subsequent refresh fails.
pub(crate) async fn run_delete(view: &mut StoreListView, store_id: &str) -> anyhow::Result<()> {
    let deleted = view.delete(store_id).await?;
    println!("deleted {deleted}");
    println!();
    println!("{}", render::render_store_table(view.stores()));
    Ok(())
}

/// Print the service's audit log of create/delete events.
///
/// # Errors
///
/// Returns an error if the audit request fails.
pub(crate) async fn run_audit(client: &ProvisionerClient) -> anyhow::Result<()> {
    let events = client.audit_log().await?;
    println!("{}", render::render_audit(&events));
    Ok(())
}

/// Print the service banner and the current store count.
///
/// # Errors
///
/// Returns an error if the status or list request fails.
pub(crate) async fn run_status(view: &mut StoreListView) -> anyhow::Result<()> {
    let status = view.client().service_status().await?;
    view.refresh().await?;
    println!("{}", status.message);
    println!("{} store(s) provisioned", view.stores().len());
    Ok(())
}
