//! Boss templates implementing [`game_core::BossOracle`].
use game_core::{BossDefinition, BossOracle};

/// BossOracle implementation backed by a definition list.
pub struct BossOracleImpl {
    definitions: Vec<BossDefinition>,
}

impl BossOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn from_definitions(definitions: Vec<BossDefinition>) -> Self {
        Self { definitions }
    }

    pub fn add_definition(&mut self, definition: BossDefinition) {
        self.definitions.push(definition);
    }

    /// Built-in dragon lord.
    pub fn builtin() -> Self {
        Self::from_definitions(game_content::default_bosses())
    }
}

impl Default for BossOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl BossOracle for BossOracleImpl {
    fn definitions(&self) -> &[BossDefinition] {
        &self.definitions
    }
}
