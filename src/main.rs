use clap::Parser;
use freebox_dhcp::{
    config::Command, AccessConfig, Airmedia, Args, Dhcp, DhcpConfig, DhcpV6Config, HttpAccess,
    StaticLease,
};
use std::{error::Error as StdError, sync::Arc};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AccessConfig::from(&args);
    tracing::info!("Using Freebox API at {}", config.base_url());

    let access = Arc::new(HttpAccess::new(&config)?);
    let dhcp = Dhcp::new(access.clone());

    let result = match args.command {
        Command::Config => dhcp.get_config().await?,
        Command::SetConfig { json } => {
            let dhcp_config: DhcpConfig = serde_json::from_str(&json)?;
            dhcp.set_config(&dhcp_config).await?
        }
        Command::V6Config => dhcp.get_v6_config().await?,
        Command::SetV6Config { json } => {
            let v6_config: DhcpV6Config = serde_json::from_str(&json)?;
            dhcp.set_v6_config(&v6_config).await?
        }
        Command::DynamicLeases => dhcp.get_dhcp_dynamic_leases().await?,
        Command::StaticLeases => dhcp.get_dhcp_static_leases().await?,
        Command::AddStaticLease { ip, mac, comment } => {
            let lease = StaticLease { ip, mac, comment };
            tracing::info!("Creating static lease {} -> {}", lease.mac, lease.ip);
            dhcp.create_dhcp_static_lease(&lease).await?
        }
        Command::EditStaticLease {
            id,
            ip,
            mac,
            comment,
        } => {
            let lease = StaticLease { ip, mac, comment };
            tracing::info!("Updating static lease {}", id);
            dhcp.edit_dhcp_static_lease(&id, &lease).await?
        }
        Command::DeleteStaticLease { id } => {
            tracing::info!("Deleting static lease {}", id);
            dhcp.delete_dhcp_static_lease(&id).await?
        }
        Command::AirmediaReceivers => Airmedia::new(access).get_airmedia_receivers().await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
