use anyhow::Context;
use clap::Parser;
use ekman_transport::config::toml_config::TomlConfig;
use ekman_transport::core::ConfigProvider;
use ekman_transport::utils::{logger, validation::Validate};
use ekman_transport::{server, EkmanService, Language};

#[derive(Parser)]
#[command(name = "ekman_server")]
#[command(about = "Ekman transport calculation server")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to listen on, overrides [server].bind
    #[arg(short, long)]
    bind: Option<String>,

    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    config.server.json_logs |= args.json_logs;

    logger::init_server_logger(args.verbose, config.server.json_logs);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("🚀 Starting Ekman transport server");
    tracing::info!("🌐 Language: {:?}", config.language());

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;

    server::serve(listener, EkmanService::new(config.language()))
        .await
        .context("server stopped")?;

    Ok(())
}
