use std::time::Duration;

use clap::Parser;
use ekman_transport::config::{Command, FormArgs};
use ekman_transport::core::ConfigProvider;
use ekman_transport::domain::ports::Backend;
use ekman_transport::domain::presets::{LOCATIONS, WIND_PRESETS};
use ekman_transport::render::panel::results_panel_text;
use ekman_transport::utils::error::{EkmanError, ErrorSeverity};
use ekman_transport::utils::{logger, validation::Validate};
use ekman_transport::{
    server, CliConfig, EkmanService, Explorer, HttpBackend, LocalStorage, Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings.with_language(cli.lang),
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match &cli.command {
        Command::Serve { .. } => {
            logger::init_server_logger(cli.verbose, settings.file.server.json_logs)
        }
        _ => logger::init_cli_logger(cli.verbose),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli, settings).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: CliConfig, settings: Settings) -> Result<(), EkmanError> {
    match cli.command {
        Command::Serve { bind } => {
            let settings = settings.with_bind(bind.as_deref());
            settings.validate()?;

            let listener = tokio::net::TcpListener::bind(settings.bind()).await?;
            server::serve(listener, EkmanService::new(settings.language())).await?;
        }

        Command::Calculate { form, json } => {
            settings.validate()?;
            let request = form.to_form(settings.defaults())?.read()?;

            let service = EkmanService::new(settings.language());
            let response = service.respond(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response.results)?);
            } else {
                print!("{}", results_panel_text(&response.results, settings.language()));
            }
        }

        Command::Submit {
            form,
            endpoint,
            output,
            bundle,
            local,
        } => {
            let settings = settings
                .with_endpoint(endpoint.as_deref())
                .with_output(output.as_deref(), bundle);
            settings.validate()?;

            if local {
                let backend = EkmanService::new(settings.language());
                submit(backend, &form, &settings).await?;
            } else {
                let backend = HttpBackend::new(
                    settings.endpoint(),
                    Duration::from_secs(settings.timeout_seconds()),
                )?;
                submit(backend, &form, &settings).await?;
            }
        }

        Command::Presets => {
            println!("📍 Locations:");
            for preset in LOCATIONS {
                println!(
                    "  {:<16} {:<16} lat {:>6.1}°  wind {:>4.1} m/s @ {:>5.1}°",
                    preset.key,
                    preset.name,
                    preset.latitude,
                    preset.wind_speed,
                    preset.wind_direction
                );
            }
            println!();
            println!("💨 Wind strengths:");
            for (key, speed) in WIND_PRESETS {
                println!("  {:<16} {:>4.1} m/s", key, speed);
            }
        }

        Command::Ranges { endpoint } => {
            let settings = settings.with_endpoint(endpoint.as_deref());
            settings.validate()?;

            let backend = HttpBackend::new(
                settings.endpoint(),
                Duration::from_secs(settings.timeout_seconds()),
            )?;
            let ranges = backend.parameter_ranges().await?;
            println!("{}", serde_json::to_string_pretty(&ranges)?);
        }
    }

    Ok(())
}

async fn submit<B: Backend>(
    backend: B,
    form: &FormArgs,
    settings: &Settings,
) -> Result<(), EkmanError> {
    let form = form.to_form(settings.defaults())?;
    let storage = LocalStorage::new(settings.output_path());
    let explorer = Explorer::new(backend, storage, settings);

    let outcome = explorer.submit(&form).await?;

    tracing::info!("✅ Report written to: {}", outcome.report_path);
    println!("{}", results_panel_text(&outcome.response.results, settings.language()));
    println!("📁 Report: {}", outcome.report_path);
    if let Some(bundle) = outcome.bundle_path {
        println!("📦 Bundle: {}", bundle);
    }

    Ok(())
}
