use clap::{Parser, Subcommand};
use storedash_provisioner::ProvisionerClient;

mod render;
mod stores;
mod view;


#[derive(Debug, Parser)]
#[command(name = "storedash")]
#[command(about = "Store provisioning dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List provisioned stores
    List,
    /// Provision a new store and show the refreshed list
    Create,
    /// Delete a store by id and show the refreshed list
    Delete { store_id: String },
    /// Show the service's audit log of create/delete events
    Audit,
    /// Show the service banner and current store count
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storedash_core::load_app_config()?;
    init_tracing(&config.log_level);

    let client = ProvisionerClient::from_config(&config)?;
    let mut view = view::StoreListView::new(client);

    match Cli::parse().command {
        Some(Commands::List) | None => stores::run_list(&mut view).await?,
        Some(Commands::Create) => stores::run_create(&mut view).await?,
        Some(Commands::Delete { store_id }) => stores::run_delete(&mut view, &store_id).await?,
        Some(Commands::Audit) => stores::run_audit(view.client()).await?,
        Some(Commands::Status) => stores::run_status(&mut view).await?,
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
