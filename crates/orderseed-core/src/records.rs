use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DATE_FORMAT;
use crate::error::Error;

/// Role code stored for every seeded worker.
pub const WORKER_ROLE: u8 = 2;

/// A row that can be written as one delimited record.
pub trait Record {
    /// Field values in header order.
    fn fields(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
    pub role: u8,
}

impl Record for Worker {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.surname.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            self.address.clone(),
            self.password.clone(),
            self.role.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub password: String,
}

impl Record for User {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.surname.clone(),
            self.email.clone(),
            self.phone_number.clone(),
            self.address.clone(),
            self.password.clone(),
        ]
    }
}

/// Lifecycle stage of an order, encoded as `1`..`4` in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    /// Statuses an order may hold once its deadline has passed.
    pub const TERMINAL: [OrderStatus; 2] = [OrderStatus::Completed, OrderStatus::Canceled];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "1",
            Self::InProgress => "2",
            Self::Completed => "3",
            Self::Canceled => "4",
        }
    }

    pub fn is_terminal(self) -> bool {
        Self::TERMINAL.contains(&self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == value.trim())
            .ok_or_else(|| Error::InvalidStatus(value.to_string()))
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub worker_id: String,
    pub user_id: String,
    pub status: OrderStatus,
    pub deadline: NaiveDate,
    pub address: String,
    pub creation_date: NaiveDate,
    pub rate: u8,
}

impl Record for Order {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.worker_id.clone(),
            self.user_id.clone(),
            self.status.to_string(),
            self.deadline.format(DATE_FORMAT).to_string(),
            self.address.clone(),
            self.creation_date.format(DATE_FORMAT).to_string(),
            self.rate.to_string(),
        ]
    }
}

/// A task included in an order (`order_contains` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: String,
    pub task_id: String,
    pub quantity: u8,
}

impl Record for OrderItem {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.order_id.clone(),
            self.task_id.clone(),
            self.quantity.to_string(),
        ]
    }
}
