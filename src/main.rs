use clap::Parser;
use meeting_cost::adapters::{ConsoleNotifier, FileMeetingSource, StaticTokenProvider};
use meeting_cost::app::addin::breakdown_json;
use meeting_cost::utils::error::ErrorSeverity;
use meeting_cost::utils::{logger, validation::Validate};
use meeting_cost::{
    AddinHandlers, AppConfig, CliConfig, Command, CostError, CostPolicy, HostEvent, PanelContext,
    PanelController, PanelView, SendDecision,
};
use std::path::Path;

async fn run_estimate(file: &Path, event: HostEvent, json: bool) -> meeting_cost::Result<()> {
    let source = FileMeetingSource::from_file(file).await?;
    let handlers = AddinHandlers::new(source, ConsoleNotifier::new());

    match event {
        HostEvent::New => handlers.on_new_appointment().await?,
        HostEvent::Send => match handlers.on_send().await {
            SendDecision::Allow => println!("✅ Send allowed"),
            SendDecision::BlockWithPrompt { message } => {
                println!("⚠️  Send held for confirmation:\n\n{}", message)
            }
        },
        HostEvent::Changed => {
            handlers.on_item_changed().await?;
        }
        HostEvent::Calculate => {
            let estimate = handlers.on_calculate().await?;
            if json {
                match breakdown_json(estimate.as_ref())? {
                    Some(breakdown) => println!("{}", breakdown),
                    None => eprintln!("⚠️  No cost breakdown: meeting data unavailable"),
                }
            }
        }
    }

    Ok(())
}

fn load_app_config(cli: &CliConfig) -> meeting_cost::Result<AppConfig> {
    match &cli.command {
        Command::Panel {
            config: Some(path), ..
        } => AppConfig::from_file(path),
        _ => Ok(AppConfig::default()),
    }
}

async fn run_panel(
    config: &AppConfig,
    meeting_id: Option<String>,
    token: Option<String>,
) -> meeting_cost::Result<PanelView> {
    config.validate()?;

    let tokens = match token {
        Some(token) => StaticTokenProvider::new(token),
        None => config.token_provider()?,
    };
    let controller = PanelController::new(tokens, config.calendar_client()?);

    Ok(controller.load(&PanelContext { meeting_id }).await)
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &CostError) {
    let code = exit_code(e.severity());
    if code == 0 {
        tracing::warn!("⚠️ {} (Category: {:?})", e, e.category());
        eprintln!("⚠️  {}", e.user_friendly_message());
        return;
    }

    tracing::error!(
        "❌ meeting-cost failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let app_config = match load_app_config(&config) {
        Ok(app_config) => app_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            report_failure(&e);
            std::process::exit(1);
        }
    };

    if app_config.json_logs(config.json_logs) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting meeting-cost CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    match config.command {
        Command::Estimate { file, event, json } => {
            if let Err(e) = run_estimate(&file, event, json).await {
                report_failure(&e);
            }
        }
        Command::Panel {
            meeting_id, token, ..
        } => match run_panel(&app_config, meeting_id, token).await {
            Ok(PanelView::Result {
                total_cost,
                details,
            }) => {
                println!("{}", total_cost);
                println!("{}", details);
            }
            Ok(PanelView::NotApplicable) => {
                println!(
                    "El calculo de costo aplica a reuniones con {} o mas participantes internos.",
                    CostPolicy::default().min_internal_participants
                )
            }
            Ok(PanelView::Error) => {
                eprintln!("❌ No se pudo calcular el costo de la reunion.");
                std::process::exit(1);
            }
            Err(e) => report_failure(&e),
        },
    }

    Ok(())
}
