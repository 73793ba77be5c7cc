use chrono::NaiveDate;
use rand::RngCore;

use orderseed_core::{Entity, Record};

use crate::emails::EmailRegistry;
use crate::errors::GenerationError;
use crate::faker::FakeRsAdapter;

pub mod orders;
pub mod people;

pub use orders::{OrderGenerator, OrderItemGenerator, generate_order_items, generate_orders};
pub use people::{UserGenerator, WorkerGenerator, generate_users, generate_workers};

/// Run-wide state shared by every record generator.
pub struct GeneratorContext<'a> {
    pub faker: FakeRsAdapter,
    pub emails: &'a mut EmailRegistry,
    pub password_hash: &'a str,
    pub phone_prefix: &'a str,
    pub today: NaiveDate,
    pub max_email_attempts: u32,
}

impl GeneratorContext<'_> {
    /// Email address for this person not issued earlier in this run.
    pub fn unique_email(
        &mut self,
        name: &str,
        surname: &str,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let faker = self.faker;
        self.emails.allocate(self.max_email_attempts, || {
            faker.email(name, surname, rng)
        })
    }
}

/// Builds one row of a table.
pub trait RecordGenerator {
    type Output: Record;

    fn entity(&self) -> Entity;

    fn generate(
        &self,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Self::Output, GenerationError>;
}

/// Produce `rows` records in order, stopping at the first failure.
pub fn generate_rows<G: RecordGenerator>(
    generator: &G,
    ctx: &mut GeneratorContext<'_>,
    rng: &mut dyn RngCore,
    rows: u64,
) -> Result<Vec<G::Output>, GenerationError> {
    let mut records = Vec::with_capacity(usize::try_from(rows).unwrap_or_default());
    for _ in 0..rows {
        records.push(generator.generate(ctx, rng)?);
    }
    tracing::debug!(entity = %generator.entity(), rows = records.len(), "rows generated");
    Ok(records)
}
