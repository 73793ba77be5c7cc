use rand::RngCore;

use orderseed_core::{Entity, User, WORKER_ROLE, Worker};

use crate::errors::GenerationError;
use crate::fields::{phone_number, uuid_v4};
use crate::generators::{GeneratorContext, RecordGenerator, generate_rows};

pub struct WorkerGenerator;

impl RecordGenerator for WorkerGenerator {
    type Output = Worker;

    fn entity(&self) -> Entity {
        Entity::Workers
    }

    fn generate(
        &self,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Worker, GenerationError> {
        let id = uuid_v4(rng);
        let name = ctx.faker.first_name(rng);
        let surname = ctx.faker.last_name(rng);
        let email = ctx.unique_email(&name, &surname, rng)?;
        Ok(Worker {
            id,
            name,
            surname,
            email,
            phone_number: phone_number(ctx.phone_prefix, rng),
            address: ctx.faker.address(rng),
            password: ctx.password_hash.to_string(),
            role: WORKER_ROLE,
        })
    }
}

pub struct UserGenerator;

impl RecordGenerator for UserGenerator {
    type Output = User;

    fn entity(&self) -> Entity {
        Entity::Users
    }

    fn generate(
        &self,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<User, GenerationError> {
        let id = uuid_v4(rng);
        let name = ctx.faker.first_name(rng);
        let surname = ctx.faker.last_name(rng);
        let email = ctx.unique_email(&name, &surname, rng)?;
        Ok(User {
            id,
            name,
            surname,
            email,
            phone_number: phone_number(ctx.phone_prefix, rng),
            address: ctx.faker.address(rng),
            password: ctx.password_hash.to_string(),
        })
    }
}

pub fn generate_workers(
    ctx: &mut GeneratorContext<'_>,
    rng: &mut dyn RngCore,
    rows: u64,
) -> Result<Vec<Worker>, GenerationError> {
    generate_rows(&WorkerGenerator, ctx, rng, rows)
}

pub fn generate_users(
    ctx: &mut GeneratorContext<'_>,
    rng: &mut dyn RngCore,
    rows: u64,
) -> Result<Vec<User>, GenerationError> {
    generate_rows(&UserGenerator, ctx, rng, rows)
}
