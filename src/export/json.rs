use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Write the full plan as pretty-printed JSON.
pub fn write_json(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
