/// Subcommand implementations
///
/// Each command returns the lines to print, so the binary stays a thin shell.
use crate::error::{CliError, Result};
use crate::state::Service;
use mixtape_core::{ColumnSpec, Notice};
use mixtape_storage::schema::{self, TableBlueprint};

/// Play a song; every notice becomes one line
pub async fn play(service: &Service, title: &str) -> Vec<String> {
    let report = service.play_song(title).await;
    report.notices.iter().map(ToString::to_string).collect()
}

/// Play history, newest first
pub async fn history(service: &Service) -> Result<Vec<String>> {
    let records = service.history().await?;
    if records.is_empty() {
        return Ok(vec![Notice::warning("No songs played yet.").to_string()]);
    }

    let mut lines = vec![Notice::success("History loaded. Your latest plays:").to_string()];
    lines.extend(records.iter().map(ToString::to_string));
    Ok(lines)
}

pub async fn clear_history(service: &Service) -> Result<Vec<String>> {
    let removed = service.clear_history().await?;
    Ok(vec![
        Notice::success(format!("Playback history cleared ({removed} plays removed).")).to_string(),
    ])
}

/// Activity log contents
pub async fn logs(service: &Service) -> Result<Vec<String>> {
    let lines = service.activity().await?;
    if lines.is_empty() {
        return Ok(vec![
            Notice::info("The activity log has not been created yet.").to_string(),
        ]);
    }
    Ok(lines)
}

pub async fn clear_logs(service: &Service) -> Result<Vec<String>> {
    let notice = if service.clear_activity().await? {
        Notice::success("Activity log deleted.")
    } else {
        Notice::warning("The activity log does not exist.")
    };
    Ok(vec![notice.to_string()])
}

/// Create a table in the `SQLite` history database
///
/// `columns` use the `name:TYPE[:pk][:notnull]` form.
pub async fn create_table(service: &Service, table: &str, columns: &[String]) -> Result<Vec<String>> {
    let pool = service.history_store().sqlite_pool().ok_or_else(|| {
        CliError::Config("create-table needs an available sqlite history backend".to_string())
    })?;

    let blueprint = columns
        .iter()
        .try_fold(TableBlueprint::new(table), |blueprint, raw| {
            ColumnSpec::parse(raw).map(|column| blueprint.column(column))
        })?;

    let statement = schema::create_table(pool, &blueprint).await?;
    Ok(vec![
        Notice::success(format!("Table '{table}' created.")).to_string(),
        statement,
    ])
}
