use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderseed_core::{Entity, TableSpec};

/// Overrides for where identifier pools are read from.
///
/// Unset entries fall back to the table's default file inside `out_dir`,
/// which is where a previous run of the matching generator wrote it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub workers: Option<PathBuf>,
    pub users: Option<PathBuf>,
    pub orders: Option<PathBuf>,
    pub tasks: Option<PathBuf>,
}

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory where data files and the report are written.
    pub out_dir: PathBuf,
    /// Rows generated per table unless overridden in `table_rows`.
    pub rows: u64,
    /// Per-table row counts.
    pub table_rows: BTreeMap<Entity, u64>,
    /// Seed for every random draw; a fresh one is picked when unset.
    pub seed: Option<u64>,
    /// Faker locale (`en_US` or `pt_BR`).
    pub locale: String,
    /// Reference date for creation dates and status selection. Defaults to the local date.
    pub today: Option<NaiveDate>,
    /// Plain password hashed once and shared by every worker and user.
    pub password: String,
    /// Precomputed hash used verbatim instead of hashing `password`.
    pub password_hash: Option<String>,
    /// bcrypt cost factor.
    pub bcrypt_cost: u32,
    /// Prefix placed before the ten random phone digits.
    pub phone_prefix: String,
    /// Maximum draws for a single unused email before giving up.
    pub max_email_attempts: u32,
    /// Identifier pool locations.
    pub inputs: InputPaths,
    /// Write `generation_report.json` next to the data files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            rows: 1000,
            table_rows: BTreeMap::new(),
            seed: None,
            locale: "en_US".to_string(),
            today: None,
            password: "test123".to_string(),
            password_hash: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            phone_prefix: "+7".to_string(),
            max_email_attempts: 1000,
            inputs: InputPaths::default(),
            write_report: true,
        }
    }
}

impl GenerateOptions {
    pub fn rows_for(&self, entity: Entity) -> u64 {
        self.table_rows.get(&entity).copied().unwrap_or(self.rows)
    }

    /// Path of the identifier pool for `table`.
    pub fn input_path(&self, table: &TableSpec) -> PathBuf {
        let configured = match table.name {
            "workers" => self.inputs.workers.as_ref(),
            "users" => self.inputs.users.as_ref(),
            "orders" => self.inputs.orders.as_ref(),
            "tasks" => self.inputs.tasks.as_ref(),
            _ => None,
        };
        configured
            .cloned()
            .unwrap_or_else(|| table.path_in(&self.out_dir))
    }

    pub fn output_path(&self, table: &TableSpec) -> PathBuf {
        table.path_in(&self.out_dir)
    }

    pub fn report_path(&self) -> PathBuf {
        report_path(&self.out_dir)
    }
}

pub fn report_path(dir: &Path) -> PathBuf {
    dir.join("generation_report.json")
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub entity: Entity,
    pub path: PathBuf,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub today: NaiveDate,
    pub locale: String,
    pub tables: Vec<TableReport>,
    pub emails_issued: u64,
    pub email_collisions: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, today: NaiveDate, locale: String) -> Self {
        Self {
            run_id,
            seed,
            today,
            locale,
            tables: Vec::new(),
            emails_issued: 0,
            email_collisions: 0,
            duration_ms: 0,
        }
    }

    pub fn table(&self, entity: Entity) -> Option<&TableReport> {
        self.tables.iter().find(|table| table.entity == entity)
    }

    pub fn rows_total(&self) -> u64 {
        self.tables.iter().map(|table| table.rows_generated).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderseed_core::{ORDERS_TABLE, TASKS_TABLE};

    #[test]
    fn input_paths_default_to_out_dir() {
        let mut options = GenerateOptions {
            out_dir: PathBuf::from("seed"),
            ..GenerateOptions::default()
        };
        assert_eq!(
            options.input_path(&ORDERS_TABLE),
            Path::new("seed").join("orders_data.csv")
        );

        options.inputs.tasks = Some(PathBuf::from("/data/tasks.csv"));
        assert_eq!(
            options.input_path(&TASKS_TABLE),
            PathBuf::from("/data/tasks.csv")
        );
    }

    #[test]
    fn table_rows_override_default() {
        let mut options = GenerateOptions::default();
        options.table_rows.insert(Entity::OrderContains, 25);
        assert_eq!(options.rows_for(Entity::OrderContains), 25);
        assert_eq!(options.rows_for(Entity::Workers), 1000);
    }
}
