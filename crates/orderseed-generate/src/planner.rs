use std::collections::BTreeSet;

use orderseed_core::Entity;

use crate::errors::GenerationError;
use crate::model::GenerateOptions;

/// Planned generation task for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub entity: Entity,
    pub rows: u64,
}

/// Order the selected tables so that pool producers run before their consumers.
///
/// Duplicates collapse. Whether a consumer's input file really came from an
/// earlier run is not checked.
pub fn plan_tables(
    selection: &[Entity],
    options: &GenerateOptions,
) -> Result<Vec<GenerationTask>, GenerationError> {
    if selection.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "no tables selected for generation".to_string(),
        ));
    }

    let ordered: BTreeSet<Entity> = selection.iter().copied().collect();
    Ok(ordered
        .into_iter()
        .map(|entity| GenerationTask {
            entity,
            rows: options.rows_for(entity),
        })
        .collect())
}
