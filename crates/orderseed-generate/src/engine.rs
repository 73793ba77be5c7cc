use std::path::PathBuf;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use orderseed_core::{
    Entity, ORDERS_TABLE, Record, TASKS_TABLE, TableSpec, USERS_TABLE, WORKERS_TABLE,
};

use crate::emails::EmailRegistry;
use crate::errors::GenerationError;
use crate::faker::{FakeRsAdapter, LocaleKey};
use crate::fields::hash_password;
use crate::generators::{
    GeneratorContext, generate_order_items, generate_orders, generate_users, generate_workers,
};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::write_table;
use crate::planner::plan_tables;
use crate::pools::{IdentifierPool, load_identifier_pool};

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating seed files.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate the selected tables in dependency order.
    ///
    /// Identifier pools are read from disk right before the table that needs
    /// them, so one call may consume files written earlier in the same call.
    pub fn run(&self, selection: &[Entity]) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let locale = self.validate()?;
        let tasks = plan_tables(selection, &self.options)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let today = self
            .options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        info!(
            run_id = %run_id,
            tables = tasks.len(),
            seed,
            today = %today,
            locale = %locale,
            "generation started"
        );

        let needs_password = tasks
            .iter()
            .any(|task| matches!(task.entity, Entity::Workers | Entity::Users));
        let password_hash = if needs_password {
            self.password_hash(seed)?
        } else {
            String::new()
        };

        let mut emails = EmailRegistry::new();
        let mut ctx = GeneratorContext {
            faker: FakeRsAdapter::new(locale),
            emails: &mut emails,
            password_hash: &password_hash,
            phone_prefix: &self.options.phone_prefix,
            today,
            max_email_attempts: self.options.max_email_attempts,
        };
        let mut report = GenerationReport::new(run_id, seed, today, locale.to_string());

        for task in tasks {
            let table = task.entity.table();
            let table_start = Instant::now();
            let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, table.name));
            let path = self.options.output_path(table);

            info!(table = table.name, rows = task.rows, "generating table");

            let (rows_generated, bytes_written) = match task.entity {
                Entity::Workers => {
                    let rows = generate_workers(&mut ctx, &mut rng, task.rows)?;
                    write_rows(&path, table, &rows)?
                }
                Entity::Users => {
                    let rows = generate_users(&mut ctx, &mut rng, task.rows)?;
                    write_rows(&path, table, &rows)?
                }
                Entity::Orders => {
                    let workers = self.load_pool(&WORKERS_TABLE)?;
                    let users = self.load_pool(&USERS_TABLE)?;
                    let rows = generate_orders(&mut ctx, &mut rng, task.rows, &workers, &users)?;
                    write_rows(&path, table, &rows)?
                }
                Entity::OrderContains => {
                    let orders = self.load_pool(&ORDERS_TABLE)?;
                    let task_ids = self.load_pool(&TASKS_TABLE)?;
                    let rows =
                        generate_order_items(&mut ctx, &mut rng, task.rows, &orders, &task_ids)?;
                    write_rows(&path, table, &rows)?
                }
            };

            info!(
                table = table.name,
                path = %path.display(),
                rows = rows_generated,
                bytes = bytes_written,
                duration_ms = table_start.elapsed().as_millis() as u64,
                "table written"
            );

            report.tables.push(TableReport {
                entity: task.entity,
                path,
                rows_requested: task.rows,
                rows_generated,
                bytes_written,
            });
        }

        report.emails_issued = emails.issued() as u64;
        report.email_collisions = emails.collisions();
        report.duration_ms = start.elapsed().as_millis() as u64;

        if self.options.write_report {
            let report_path = self.options.report_path();
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
        }

        info!(
            run_id = %report.run_id,
            rows = report.rows_total(),
            email_collisions = report.email_collisions,
            duration_ms = report.duration_ms,
            "generation finished"
        );

        Ok(GenerationResult { out_dir, report })
    }

    fn validate(&self) -> Result<LocaleKey, GenerationError> {
        let locale = LocaleKey::resolve(&self.options.locale)?;
        if self.options.max_email_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_email_attempts must be at least 1".to_string(),
            ));
        }
        if self.options.password_hash.is_none()
            && !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.options.bcrypt_cost)
        {
            return Err(GenerationError::InvalidOptions(format!(
                "bcrypt_cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}"
            )));
        }
        Ok(locale)
    }

    /// The single hash stored as every worker's and user's password.
    fn password_hash(&self, seed: u64) -> Result<String, GenerationError> {
        if let Some(hash) = &self.options.password_hash {
            return Ok(hash.clone());
        }
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "password"));
        hash_password(&self.options.password, self.options.bcrypt_cost, &mut rng)
    }

    fn load_pool(&self, table: &TableSpec) -> Result<IdentifierPool, GenerationError> {
        let path = self.options.input_path(table);
        let pool = load_identifier_pool(table.name, &path)?;
        info!(pool = table.name, path = %path.display(), ids = pool.len(), "identifier pool loaded");
        Ok(pool)
    }
}

fn write_rows<R: Record>(
    path: &std::path::Path,
    table: &TableSpec,
    rows: &[R],
) -> Result<(u64, u64), GenerationError> {
    let bytes = write_table(path, table, rows)?;
    Ok((rows.len() as u64, bytes))
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_seed_separates_tables() {
        assert_ne!(hash_seed(42, "workers"), hash_seed(42, "users"));
        assert_eq!(hash_seed(42, "orders"), hash_seed(42, "orders"));
        assert_ne!(hash_seed(1, "orders"), hash_seed(2, "orders"));
    }

    #[test]
    fn rejects_unknown_locale_and_zero_attempts() {
        let engine = GenerationEngine::new(GenerateOptions {
            locale: "xx_XX".to_string(),
            ..GenerateOptions::default()
        });
        assert!(matches!(
            engine.run(&[Entity::Workers]),
            Err(GenerationError::InvalidOptions(_))
        ));

        let engine = GenerationEngine::new(GenerateOptions {
            max_email_attempts: 0,
            ..GenerateOptions::default()
        });
        assert!(matches!(
            engine.run(&[Entity::Users]),
            Err(GenerationError::InvalidOptions(_))
        ));
    }

    #[test]
    fn precomputed_hash_skips_cost_check() {
        let engine = GenerationEngine::new(GenerateOptions {
            bcrypt_cost: 1,
            password_hash: Some("$2b$12$precomputed".to_string()),
            ..GenerateOptions::default()
        });
        assert!(engine.validate().is_ok());
        assert_eq!(
            engine.password_hash(7).expect("hash"),
            "$2b$12$precomputed"
        );
    }

    #[test]
    fn hashed_password_is_stable_for_seed() {
        let engine = GenerationEngine::new(GenerateOptions {
            bcrypt_cost: 4,
            ..GenerateOptions::default()
        });
        let first = engine.password_hash(5).expect("first hash");
        let second = engine.password_hash(5).expect("second hash");
        assert_eq!(first, second);
        assert!(bcrypt::verify("test123", &first).expect("verify"));
    }
}
