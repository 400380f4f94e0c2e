use anyhow::Context;

use shopdesk_console::{run_session, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    shopdesk_observability::init(&config.log);

    if let Some(format) = &config.rejected_log_format {
        tracing::warn!(%format, "unknown SHOPDESK_LOG_FORMAT; using plain logs");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let menu = run_session(stdin.lock(), stdout.lock()).context("console session failed")?;

    tracing::info!(
        products = menu.products().len(),
        sales = menu.sales().len(),
        "discarding in-memory state"
    );
    println!("Program closed.");
    Ok(())
}
