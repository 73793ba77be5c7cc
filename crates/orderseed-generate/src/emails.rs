use std::collections::HashSet;

use crate::errors::GenerationError;

/// Every email address handed out during one run.
///
/// Workers and users draw from the same registry so an address never
/// appears twice across both tables.
#[derive(Debug, Default)]
pub struct EmailRegistry {
    issued: HashSet<String>,
    collisions: u64,
}

impl EmailRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw candidates until one has not been issued yet.
    ///
    /// Gives up with [`GenerationError::EmailsExhausted`] after
    /// `max_attempts` draws.
    pub fn allocate<F>(&mut self, max_attempts: u32, mut draw: F) -> Result<String, GenerationError>
    where
        F: FnMut() -> String,
    {
        for _ in 0..max_attempts {
            let candidate = draw();
            if self.issued.insert(candidate.clone()) {
                return Ok(candidate);
            }
            self.collisions += 1;
        }
        Err(GenerationError::EmailsExhausted {
            attempts: max_attempts,
        })
    }

    /// Mark an address as taken without drawing it.
    pub fn reserve(&mut self, email: &str) -> bool {
        self.issued.insert(email.to_string())
    }

    pub fn contains(&self, email: &str) -> bool {
        self.issued.contains(email)
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_already_issued_candidates() {
        let mut registry = EmailRegistry::new();
        registry.reserve("taken@example.com");

        let mut candidates = vec!["fresh@example.com", "taken@example.com"];
        let email = registry
            .allocate(5, || candidates.pop().unwrap_or_default().to_string())
            .expect("allocate email");

        assert_eq!(email, "fresh@example.com");
        assert_eq!(registry.collisions(), 1);
        assert_eq!(registry.issued(), 2);
    }

    #[test]
    fn fails_after_attempt_cap() {
        let mut registry = EmailRegistry::new();
        registry.reserve("only@example.com");

        let mut draws = 0;
        let result = registry.allocate(4, || {
            draws += 1;
            "only@example.com".to_string()
        });

        assert!(matches!(
            result,
            Err(GenerationError::EmailsExhausted { attempts: 4 })
        ));
        assert_eq!(draws, 4);
    }
}
