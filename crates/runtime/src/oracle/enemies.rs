//! Enemy templates implementing [`game_core::EnemyOracle`].
use game_core::{EnemyDefinition, EnemyOracle};

/// EnemyOracle implementation backed by a definition list.
pub struct EnemyOracleImpl {
    definitions: Vec<EnemyDefinition>,
}

impl EnemyOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn from_definitions(definitions: Vec<EnemyDefinition>) -> Self {
        Self { definitions }
    }

    /// Add a template. A later definition with the same id is shadowed by the first.
    pub fn add_definition(&mut self, definition: EnemyDefinition) {
        self.definitions.push(definition);
    }

    /// Built-in goblin and skeleton.
    pub fn builtin() -> Self {
        Self::from_definitions(game_content::default_enemies())
    }
}

impl Default for EnemyOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyOracle for EnemyOracleImpl {
    fn definitions(&self) -> &[EnemyDefinition] {
        &self.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AiKind, Stats};

    #[test]
    fn test_resolve_falls_back_to_first() {
        let oracle = EnemyOracleImpl::builtin();
        assert_eq!(oracle.resolve("skeleton").unwrap().id, "skeleton");
        assert_eq!(oracle.resolve("dragon").unwrap().id, "goblin");
        assert!(EnemyOracleImpl::new().resolve("goblin").is_none());
    }

    #[test]
    fn test_elite_split() {
        let mut oracle = EnemyOracleImpl::builtin();
        oracle.add_definition(EnemyDefinition::new(
            "elite_troll",
            "Troll",
            'T',
            Stats::new(90, 14, 6, 70),
            AiKind::Melee,
        ));

        assert_eq!(oracle.normal_ids(), vec!["goblin", "skeleton"]);
        assert_eq!(oracle.elite_ids(), vec!["elite_troll"]);
    }
}
