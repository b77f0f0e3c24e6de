//! Unlock rules implementing [`game_core::UnlockOracle`].
use game_core::{UnlockDefinition, UnlockOracle};

pub struct UnlockOracleImpl {
    definitions: Vec<UnlockDefinition>,
}

impl UnlockOracleImpl {
    pub fn from_definitions(definitions: Vec<UnlockDefinition>) -> Self {
        Self { definitions }
    }

    pub fn builtin() -> Self {
        Self::from_definitions(game_content::default_unlocks())
    }
}

impl UnlockOracle for UnlockOracleImpl {
    fn definitions(&self) -> &[UnlockDefinition] {
        &self.definitions
    }
}
