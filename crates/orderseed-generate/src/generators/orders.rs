use rand::RngCore;

use orderseed_core::{Entity, Order, OrderItem};

use crate::errors::GenerationError;
use crate::fields::{
    creation_date_this_year, deadline_for, quantity, select_rate, select_status, uuid_v4,
};
use crate::generators::{GeneratorContext, RecordGenerator, generate_rows};
use crate::pools::IdentifierPool;

pub struct OrderGenerator<'p> {
    pub workers: &'p IdentifierPool,
    pub users: &'p IdentifierPool,
}

impl RecordGenerator for OrderGenerator<'_> {
    type Output = Order;

    fn entity(&self) -> Entity {
        Entity::Orders
    }

    fn generate(
        &self,
        ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Order, GenerationError> {
        let id = uuid_v4(rng);
        let worker_id = self.workers.pick(rng)?.to_string();
        let user_id = self.users.pick(rng)?.to_string();
        let address = ctx.faker.address(rng);
        let creation_date = creation_date_this_year(ctx.today, rng);
        let deadline = deadline_for(creation_date, rng);
        let status = select_status(deadline, ctx.today, rng);
        let rate = select_rate(status, rng);
        Ok(Order {
            id,
            worker_id,
            user_id,
            status,
            deadline,
            address,
            creation_date,
            rate,
        })
    }
}

pub struct OrderItemGenerator<'p> {
    pub orders: &'p IdentifierPool,
    pub tasks: &'p IdentifierPool,
}

impl RecordGenerator for OrderItemGenerator<'_> {
    type Output = OrderItem;

    fn entity(&self) -> Entity {
        Entity::OrderContains
    }

    fn generate(
        &self,
        _ctx: &mut GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<OrderItem, GenerationError> {
        Ok(OrderItem {
            id: uuid_v4(rng),
            order_id: self.orders.pick(rng)?.to_string(),
            task_id: self.tasks.pick(rng)?.to_string(),
            quantity: quantity(rng),
        })
    }
}

pub fn generate_orders(
    ctx: &mut GeneratorContext<'_>,
    rng: &mut dyn RngCore,
    rows: u64,
    workers: &IdentifierPool,
    users: &IdentifierPool,
) -> Result<Vec<Order>, GenerationError> {
    generate_rows(&OrderGenerator { workers, users }, ctx, rng, rows)
}

pub fn generate_order_items(
    ctx: &mut GeneratorContext<'_>,
    rng: &mut dyn RngCore,
    rows: u64,
    orders: &IdentifierPool,
    tasks: &IdentifierPool,
) -> Result<Vec<OrderItem>, GenerationError> {
    generate_rows(&OrderItemGenerator { orders, tasks }, ctx, rng, rows)
}
