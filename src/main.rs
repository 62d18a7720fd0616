use clap::Parser;
use std::sync::Arc;
use webservices_consumer::core::ConfigProvider;
use webservices_consumer::utils::error::{ConsumerError, ErrorSeverity};
use webservices_consumer::utils::logger;
use webservices_consumer::{
    default_routes, CliConfig, LocalStorage, Navigator, ViewContext, WebservicesClient,
};

fn exit_code(e: &ConsumerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 可重試的錯誤
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &ConsumerError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.log_json {
        logger::init_json_logger(config.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    }
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    tracing::debug!("Resolved config: {:?}", config);

    let storage = Arc::new(LocalStorage::new(config.output_path().to_string()));
    let table = default_routes(storage).unwrap_or_else(|e| fail(&e));

    if cli.list_routes {
        for route in table.routes() {
            let binding = if route.view.is_lazy() { "lazy" } else { "eager" };
            println!("{:<18} {:<8} {}", route.path, route.name, binding);
        }
        return;
    }

    let client = WebservicesClient::from_config(&config).unwrap_or_else(|e| fail(&e));
    let ctx = ViewContext::new(client, config.output_format());
    let mut navigator = Navigator::new(table, ctx).unwrap_or_else(|e| fail(&e));

    tracing::info!("Using Webservices at {}", config.api_base_url());

    for (i, path) in cli.paths.iter().enumerate() {
        match navigator.navigate(path).await {
            Ok(output) => {
                if i > 0 {
                    println!();
                }
                println!("{}", output);
            }
            Err(e) => fail(&e),
        }
    }
}
