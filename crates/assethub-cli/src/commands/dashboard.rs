//! Dashboard CLI command.

use chrono::Utc;

use assethub_core::result::AppResult;

use super::Session;
use super::audit::AuditRow;
use crate::output::{self, OutputFormat};

/// Print summary statistics and recent activity
pub async fn execute(session: &Session) -> AppResult<()> {
    let stats = session.services.dashboard.stats(Utc::now()).await?;

    if session.format == OutputFormat::Json {
        output::print_json(&stats);
        return Ok(());
    }

    output::print_kv("Total aset", &stats.total_assets.to_string());
    output::print_kv("Total kategori", &stats.total_categories.to_string());
    output::print_kv("Total lokasi", &stats.total_locations.to_string());
    output::print_kv("Total QR Code", &stats.total_qr_codes.to_string());
    output::print_kv("Aktivitas hari ini", &stats.today_activity.to_string());
    println!();

    let rows: Vec<AuditRow> = stats.recent_activity.iter().map(AuditRow::from).collect();
    output::print_list(&rows, OutputFormat::Table);
    Ok(())
}
