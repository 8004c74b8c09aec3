use dd_service_lister::utils::logger;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logger::init_cli_logger();

    tracing::info!("Starting dd-service-lister");

    let code = dd_service_lister::run(
        |name| std::env::var(name).ok(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    if code == 0 {
        tracing::info!("✅ Service listing completed");
    }
    ExitCode::from(code)
}
