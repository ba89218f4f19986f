/// Cadence Server - multi-user music streaming backend
use cadence_core::storage::StorageContext;
use cadence_server::{config::ServerConfig, create_router, services::AuthService, state::AppState};
use cadence_storage::LocalStorageContext;
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-server")]
#[command(about = "Cadence multi-user music streaming server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user with a password
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
    /// Load the demo catalog into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cadence_server=info,cadence_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser { username, password } => add_user(config, &username, &password).await?,
        Commands::ListUsers => list_users(config).await?,
        Commands::Seed => seed(config).await?,
    }

    Ok(())
}

/// Open the database, creating its directory, and bring the schema up to date
async fn open_database(config: &ServerConfig) -> anyhow::Result<SqlitePool> {
    if let Some(dir) = config.database_dir() {
        tokio::fs::create_dir_all(&dir).await?;
    }

    let pool = cadence_storage::create_pool(&config.storage.database_url).await?;
    cadence_storage::run_migrations(&pool).await?;

    Ok(pool)
}

fn auth_service(config: &ServerConfig) -> AuthService {
    AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    )
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Cadence Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let pool = open_database(&config).await?;
    tracing::info!("Database connected");

    let auth_service = Arc::new(auth_service(&config));
    let app = create_router(AppState::new(pool, auth_service));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: ServerConfig, username: &str, password: &str) -> anyhow::Result<()> {
    let pool = open_database(&config).await?;

    let user = auth_service(&config)
        .create_account(&pool, username, password)
        .await?;
    println!("Created user {} ({})", user.name, user.id);

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let pool = open_database(&config).await?;
    let users = cadence_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name);
    }

    Ok(())
}

async fn seed(config: ServerConfig) -> anyhow::Result<()> {
    let pool = open_database(&config).await?;
    let outcome = LocalStorageContext::anonymous(pool).seed_catalog().await?;

    println!("{}", outcome.message);

    Ok(())
}
