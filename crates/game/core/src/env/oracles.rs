use super::{BossDefinition, EnemyDefinition, UnlockDefinition};

/// Read-only access to enemy templates.
pub trait EnemyOracle: Send + Sync {
    fn definitions(&self) -> &[EnemyDefinition];

    fn definition(&self, id: &str) -> Option<&EnemyDefinition> {
        self.definitions().iter().find(|d| d.id == id)
    }

    /// Exact match, otherwise the first definition.
    fn resolve(&self, id: &str) -> Option<&EnemyDefinition> {
        self.definition(id).or_else(|| self.definitions().first())
    }

    /// Ids without the elite prefix, in definition order.
    fn normal_ids(&self) -> Vec<&str> {
        self.definitions()
            .iter()
            .filter(|d| !d.is_elite())
            .map(|d| d.id.as_str())
            .collect()
    }

    /// Ids with the elite prefix, in definition order.
    fn elite_ids(&self) -> Vec<&str> {
        self.definitions()
            .iter()
            .filter(|d| d.is_elite())
            .map(|d| d.id.as_str())
            .collect()
    }
}

/// Read-only access to boss templates.
pub trait BossOracle: Send + Sync {
    fn definitions(&self) -> &[BossDefinition];

    fn definition(&self, id: &str) -> Option<&BossDefinition> {
        self.definitions().iter().find(|d| d.id == id)
    }

    /// Exact match, otherwise the first definition.
    fn resolve(&self, id: &str) -> Option<&BossDefinition> {
        self.definition(id).or_else(|| self.definitions().first())
    }

    fn ids(&self) -> Vec<&str> {
        self.definitions().iter().map(|d| d.id.as_str()).collect()
    }
}

/// Read-only access to unlock rules.
pub trait UnlockOracle: Send + Sync {
    fn definitions(&self) -> &[UnlockDefinition];
}
