//! Policy-driven action provider.

use async_trait::async_trait;
use game_core::{Action, CombatConfig, CombatState, EntityId, RandomSource};

use super::decide_action;
use crate::api::{ActionProvider, Result, RuntimeError};

/// Runs the entity's own decision policy.
///
/// Enemies follow their [`game_core::AiKind`]; the player uses the melee
/// policy against the nearest enemy, which makes fully automatic runs
/// possible. Every decided action is charged `ap_cost`.
#[derive(Debug, Clone)]
pub struct AiActionProvider {
    ap_cost: u32,
}

impl AiActionProvider {
    pub fn new() -> Self {
        Self {
            ap_cost: CombatConfig::DEFAULT_AP_COST,
        }
    }

    pub fn from_config(config: &CombatConfig) -> Self {
        Self {
            ap_cost: config.default_ap_cost,
        }
    }

    pub fn ap_cost(&self) -> u32 {
        self.ap_cost
    }
}

impl Default for AiActionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionProvider for AiActionProvider {
    async fn provide_action(
        &self,
        entity: EntityId,
        state: &CombatState,
        rng: &mut (dyn RandomSource + Send),
    ) -> Result<Action> {
        let action = decide_action(state, entity, rng)
            .ok_or(RuntimeError::InvalidEntityId(entity))?
            .with_cost(self.ap_cost);
        tracing::debug!("Entity {} decided to {}", entity, action);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Entity, Grid, PcgRng, Position};

    #[tokio::test]
    async fn test_configured_cost_is_charged_to_decisions() {
        let config = CombatConfig {
            default_ap_cost: 40,
            ..CombatConfig::default()
        };
        let provider = AiActionProvider::from_config(&config);
        let state = CombatState::new(Grid::new(5, 5), vec![Entity::player(Position::new(0, 0))]).unwrap();
        let mut rng = PcgRng::seeded(3);

        let action = provider
            .provide_action(EntityId::PLAYER, &state, &mut rng)
            .await
            .unwrap();
        assert_eq!(action, Action::wait().with_cost(40));
    }
}
