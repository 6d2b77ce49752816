//! Asset code generation.

use chrono::{DateTime, Utc};
use tracing::debug;

use assethub_core::result::AppResult;
use assethub_core::types::time::utc_day_bounds;
use assethub_database::StoreTransaction;
use assethub_entity::asset::AssetCode;

/// Produces `AST-YYYYMMDD-NNNN` codes partitioned by UTC day.
pub struct CodeGenerator;

impl CodeGenerator {
    /// Return a code not in use at the time of the check.
    ///
    /// The sequence starts at the number of assets created on the same UTC
    /// day plus one and is bumped while the code is taken. A concurrent
    /// unit of work can still claim the same code before this one inserts;
    /// the unique constraint on `asset_code` rejects the loser with
    /// `StorageConflict`.
    pub async fn generate_unique_code(
        tx: &mut dyn StoreTransaction,
        current_time: DateTime<Utc>,
    ) -> AppResult<String> {
        let day = current_time.date_naive();
        let (start, end) = utc_day_bounds(day);
        let created_today = tx.count_assets_created_between(start, end).await?;

        let mut sequence = u32::try_from(created_today).unwrap_or(0) + 1;
        loop {
            let code = AssetCode::new(day, sequence).to_string();
            if !tx.asset_code_exists(&code).await? {
                debug!(code = %code, "Allocated asset code");
                return Ok(code);
            }
            sequence += 1;
        }
    }
}
