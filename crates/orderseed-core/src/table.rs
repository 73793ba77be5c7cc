use std::path::{Path, PathBuf};

/// Field separator for every data file.
pub const FIELD_DELIMITER: u8 = b';';

/// Layout of one delimited data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Logical table name, also used to derive per-table seeds.
    pub name: &'static str,
    /// Default file name inside the data directory.
    pub file_name: &'static str,
    /// Header row, in output order.
    pub columns: &'static [&'static str],
}

impl TableSpec {
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name)
    }

    pub fn header(&self) -> String {
        self.columns
            .join(char::from(FIELD_DELIMITER).encode_utf8(&mut [0; 4]))
    }
}

pub const WORKERS_TABLE: TableSpec = TableSpec {
    name: "workers",
    file_name: "workers_data.csv",
    columns: &[
        "id",
        "name",
        "surname",
        "email",
        "phone_number",
        "address",
        "password",
        "role",
    ],
};

pub const USERS_TABLE: TableSpec = TableSpec {
    name: "users",
    file_name: "users_data.csv",
    columns: &[
        "id",
        "name",
        "surname",
        "email",
        "phone_number",
        "address",
        "password",
    ],
};

pub const ORDERS_TABLE: TableSpec = TableSpec {
    name: "orders",
    file_name: "orders_data.csv",
    columns: &[
        "id",
        "worker_id",
        "user_id",
        "status",
        "deadline",
        "address",
        "creation_date",
        "rate",
    ],
};

pub const ORDER_CONTAINS_TABLE: TableSpec = TableSpec {
    name: "order_contains",
    file_name: "order_contains_data.csv",
    columns: &["id", "order_id", "task_id", "quantity"],
};

/// Tasks are never generated here; only their identifiers are read.
pub const TASKS_TABLE: TableSpec = TableSpec {
    name: "tasks",
    file_name: "tasks_data.csv",
    columns: &["id"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_join_with_semicolons() {
        assert_eq!(
            ORDERS_TABLE.header(),
            "id;worker_id;user_id;status;deadline;address;creation_date;rate"
        );
        assert_eq!(ORDER_CONTAINS_TABLE.header(), "id;order_id;task_id;quantity");
        let header = WORKERS_TABLE.header();
        let split: Vec<&str> = header.split(char::from(FIELD_DELIMITER)).collect();
        assert_eq!(split, WORKERS_TABLE.columns);
    }

    #[test]
    fn path_in_uses_file_name() {
        let path = WORKERS_TABLE.path_in(Path::new("seed"));
        assert_eq!(path, Path::new("seed").join("workers_data.csv"));
    }
}
