use cascade_dns_api::AppState;
use cascade_dns_domain::CliOverrides;
use cascade_dns_infrastructure::dns::DnsServerHandler;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "cascade-dns")]
#[command(version)]
#[command(about = "Cascade DNS - caching DNS server with local records and DNS-over-HTTPS")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port (UDP and TCP)
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port (DoH and admin API)
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Cascade DNS v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&repos, &dns_services);

    let dns_handler = Arc::new(DnsServerHandler::new(use_cases.resolve_query.clone()));

    let app_state = AppState {
        resolve_query: use_cases.resolve_query,
        dns_handler: dns_handler.clone(),
        create_record: use_cases.create_record,
        get_records: use_cases.get_records,
        delete_records: use_cases.delete_records,
        get_cache_stats: use_cases.get_cache_stats,
    };

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    let dns_server = server::start_dns_server(dns_addr, dns_handler, &config.server);
    let web_server = server::start_web_server(web_addr, app_state);

    tokio::select! {
        result = dns_server => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        result = web_server => {
            if let Err(e) = result {
                error!(error = %e, "Web server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
