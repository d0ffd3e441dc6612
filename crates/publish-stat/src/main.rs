mod bootstrap;
mod export;

use anyhow::{Context, Result};
use stat_core::settings::Settings;
use stat_data::analysis::analyze_publishing;
use stat_ui::app::{App, ViewMode};
use stat_ui::text_report::render_text_report;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("publish-stat v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let config = settings
        .report_config()
        .context("cannot build the report configuration")?;
    let base_dir = config.base_dir.display().to_string();

    let result = analyze_publishing(&config);
    tracing::debug!(
        "Analysis took {:.3}s, {} records",
        result.metadata.scan_time_seconds,
        result.metadata.records_read
    );

    if let Some(dir) = &settings.output {
        if let Some(written) = export::export_with_fallback(&result, dir) {
            eprintln!("Exported statistics to {}", written.display());
        }
    }

    match settings.view.as_str() {
        "report" => {
            print!("{}", render_text_report(&result, &base_dir, settings.recent_days));
        }
        view => {
            let app = App::new(
                &settings.theme,
                ViewMode::from_name(view),
                base_dir,
                usize::from(settings.chart_days),
                result,
            );

            // Ctrl+C is also caught here for signals that bypass raw mode.
            tokio::select! {
                result = app.run() => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; exiting");
                }
            }
        }
    }

    Ok(())
}
