use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::table::{ORDER_CONTAINS_TABLE, ORDERS_TABLE, TableSpec, USERS_TABLE, WORKERS_TABLE};

/// A generated table, listed in the order generators must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Entity {
    Workers,
    Users,
    Orders,
    OrderContains,
}

impl Entity {
    /// Canonical order: workers and users feed orders, orders feed order-contains.
    pub const ALL: [Entity; 4] = [
        Entity::Workers,
        Entity::Users,
        Entity::Orders,
        Entity::OrderContains,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workers => "workers",
            Self::Users => "users",
            Self::Orders => "orders",
            Self::OrderContains => "order-contains",
        }
    }

    pub fn table(self) -> &'static TableSpec {
        match self {
            Self::Workers => &WORKERS_TABLE,
            Self::Users => &USERS_TABLE,
            Self::Orders => &ORDERS_TABLE,
            Self::OrderContains => &ORDER_CONTAINS_TABLE,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "workers" | "worker" => Ok(Self::Workers),
            "users" | "user" => Ok(Self::Users),
            "orders" | "order" => Ok(Self::Orders),
            "order-contains" | "order-items" => Ok(Self::OrderContains),
            _ => Err(Error::InvalidEntity(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("Order_Contains".parse::<Entity>().ok(), Some(Entity::OrderContains));
        assert_eq!("worker".parse::<Entity>().ok(), Some(Entity::Workers));
        assert!(matches!(
            "tasks".parse::<Entity>(),
            Err(Error::InvalidEntity(_))
        ));
    }

    #[test]
    fn canonical_order_is_sorted() {
        let mut sorted = Entity::ALL;
        sorted.sort();
        assert_eq!(sorted, Entity::ALL);
    }
}
