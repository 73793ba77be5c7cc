use std::path::Path;

use rand::RngCore;
use rand::seq::IndexedRandom;

use orderseed_core::FIELD_DELIMITER;

use crate::errors::GenerationError;

/// Previously generated primary keys of one table, sampled for foreign keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierPool {
    name: String,
    ids: Vec<String>,
}

impl IdentifierPool {
    pub fn from_ids<I, S>(name: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|value| value == id)
    }

    /// Uniform pick with replacement.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Result<&str, GenerationError> {
        self.ids
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| GenerationError::EmptyPool(self.name.clone()))
    }
}

/// Read the first column of every non-empty data row of a `;`-delimited file.
pub fn load_identifier_pool(name: &str, path: &Path) -> Result<IdentifierPool, GenerationError> {
    let input_error = |source: csv::Error| GenerationError::Input {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(input_error)?;

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record.map_err(input_error)?;
        match record.get(0).map(str::trim) {
            Some(id) if !id.is_empty() => ids.push(id.to_string()),
            _ => continue,
        }
    }

    Ok(IdentifierPool {
        name: name.to_string(),
        ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn temp_file(label: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("orderseed_pool_{label}_{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn loads_first_column_and_skips_blank_rows() {
        let path = temp_file(
            "blank",
            "id;name;surname\na-1;Ann;Lee\n\nb-2;Bob;Ray\n;ghost;row\nc-3\n",
        );
        let pool = load_identifier_pool("workers", &path).expect("load pool");
        assert_eq!(pool.ids(), ["a-1", "b-2", "c-3"]);
        assert_eq!(pool.name(), "workers");
    }

    #[test]
    fn header_only_file_yields_empty_pool() {
        let path = temp_file("header", "id;order_id;task_id;quantity\n");
        let pool = load_identifier_pool("orders", &path).expect("load pool");
        assert!(pool.is_empty());

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(matches!(
            pool.pick(&mut rng),
            Err(GenerationError::EmptyPool(name)) if name == "orders"
        ));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let mut path = std::env::temp_dir();
        path.push(format!("orderseed_missing_{}.csv", uuid::Uuid::new_v4()));
        let result = load_identifier_pool("tasks", &path);
        assert!(matches!(result, Err(GenerationError::Input { .. })));
    }

    #[test]
    fn pick_stays_inside_pool() {
        let pool = IdentifierPool::from_ids("users", ["x", "y", "z"]);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let id = pool.pick(&mut rng).expect("pick id");
            assert!(pool.contains(id));
        }
    }
}
