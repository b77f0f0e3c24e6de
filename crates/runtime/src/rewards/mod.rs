//! Treasure and room reward generation.
//!
//! Rewards are inventory-aware: once the player owns one of the core stat
//! effects, minor relics that level those effects become more likely.

use game_content::{MINOR_RELIC_TEMPLATES, TREASURE_POOL};
use game_core::{EffectKind, Inventory, RandomSource, Reward, Treasure, TreasureKind};

/// Owning any of these shifts the kind roll toward minor relics.
pub const UPGRADE_BIAS_EFFECTS: [EffectKind; 3] = [
    EffectKind::MaxHpBoost,
    EffectKind::SpeedBoost,
    EffectKind::BonusDamage,
];

/// Rolls which kind of treasure to hand out. Consumes one draw.
pub fn select_treasure_kind<R>(rng: &mut R, inventory: &Inventory) -> TreasureKind
where
    R: RandomSource + ?Sized,
{
    let roll = rng.percent();
    let biased = UPGRADE_BIAS_EFFECTS.iter().any(|&k| inventory.has_effect(k));

    if biased {
        if roll < 30.0 {
            TreasureKind::MinorRelic
        } else if roll < 80.0 {
            TreasureKind::MajorRelic
        } else {
            TreasureKind::Consumable
        }
    } else if roll < 70.0 {
        TreasureKind::MajorRelic
    } else if roll < 90.0 {
        TreasureKind::Consumable
    } else {
        TreasureKind::MinorRelic
    }
}

/// A relic adding one level to an effect the inventory already has.
///
/// `None` (without consuming a draw) when nothing is upgradeable. The id is
/// `minor_relic_{effect}_{serial}`.
pub fn generate_minor_relic<R>(rng: &mut R, inventory: &Inventory, serial: u32) -> Option<Treasure>
where
    R: RandomSource + ?Sized,
{
    let candidates: Vec<_> = MINOR_RELIC_TEMPLATES
        .iter()
        .filter(|t| inventory.has_effect(t.effect))
        .collect();
    let template = game_core::env::pick(rng, &candidates)?;

    Some(template.instantiate(format!("minor_relic_{}_{}", template.effect, serial)))
}

/// Draws treasures from a fixed pool.
///
/// Minor relics are numbered from a counter owned by the generator, so every
/// relic it issues has a distinct id.
#[derive(Clone, Debug)]
pub struct RewardGenerator<'a> {
    pool: &'a [Treasure],
    issued: u32,
}

impl<'a> RewardGenerator<'a> {
    pub fn new(pool: &'a [Treasure]) -> Self {
        Self { pool, issued: 0 }
    }

    /// Continues numbering after `issued` earlier minor relics.
    #[must_use]
    pub fn with_issued(mut self, issued: u32) -> Self {
        self.issued = issued;
        self
    }

    /// Minor relics issued so far.
    pub fn issued(&self) -> u32 {
        self.issued
    }

    pub fn builtin() -> RewardGenerator<'static> {
        RewardGenerator::new(&TREASURE_POOL)
    }

    /// One treasure for the player's current inventory.
    ///
    /// A minor-relic roll that finds nothing to upgrade draws from the whole
    /// pool instead.
    pub fn generate_treasure<R>(&mut self, rng: &mut R, inventory: &Inventory) -> Treasure
    where
        R: RandomSource + ?Sized,
    {
        let kind = select_treasure_kind(rng, inventory);

        if kind == TreasureKind::MinorRelic
            && let Some(relic) = generate_minor_relic(rng, inventory, self.issued + 1)
        {
            self.issued += 1;
            return relic;
        }

        let candidates: Vec<&Treasure> = self
            .pool
            .iter()
            .filter(|t| kind == TreasureKind::MinorRelic || t.kind == kind)
            .collect();

        match game_core::env::pick(rng, &candidates) {
            Some(treasure) => (*treasure).clone(),
            None => self.fallback(),
        }
    }

    pub fn generate_room_reward<R>(&mut self, rng: &mut R, inventory: &Inventory) -> Reward
    where
        R: RandomSource + ?Sized,
    {
        Reward::new(self.generate_treasure(rng, inventory))
    }

    /// `count` independent draws. Duplicates are possible.
    pub fn generate_treasure_choices<R>(
        &mut self,
        count: usize,
        rng: &mut R,
        inventory: &Inventory,
    ) -> Vec<Treasure>
    where
        R: RandomSource + ?Sized,
    {
        (0..count)
            .map(|_| self.generate_treasure(rng, inventory))
            .collect()
    }

    fn fallback(&self) -> Treasure {
        self.pool
            .first()
            .unwrap_or(&TREASURE_POOL[0])
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EffectValue, Rarity, SequenceRng};

    fn inventory_with(kind: EffectKind) -> Inventory {
        Inventory::from_treasures(vec![Treasure::new(
            "relic",
            "Relic",
            "",
            Rarity::Common,
            TreasureKind::MajorRelic,
            vec![EffectValue::new(kind, 5)],
        )])
    }

    #[test]
    fn test_kind_roll_without_bias() {
        let empty = Inventory::new();
        let roll = |r| select_treasure_kind(&mut SequenceRng::constant(r), &empty);

        assert_eq!(roll(0.0), TreasureKind::MajorRelic);
        assert_eq!(roll(0.68), TreasureKind::MajorRelic);
        assert_eq!(roll(0.72), TreasureKind::Consumable);
        assert_eq!(roll(0.88), TreasureKind::Consumable);
        assert_eq!(roll(0.92), TreasureKind::MinorRelic);
    }

    #[test]
    fn test_kind_roll_with_bias() {
        let inv = inventory_with(EffectKind::SpeedBoost);
        let roll = |r| select_treasure_kind(&mut SequenceRng::constant(r), &inv);

        assert_eq!(roll(0.28), TreasureKind::MinorRelic);
        assert_eq!(roll(0.32), TreasureKind::MajorRelic);
        assert_eq!(roll(0.78), TreasureKind::MajorRelic);
        assert_eq!(roll(0.82), TreasureKind::Consumable);
    }

    #[test]
    fn test_lifesteal_alone_does_not_bias() {
        let inv = inventory_with(EffectKind::Lifesteal);
        let kind = select_treasure_kind(&mut SequenceRng::constant(0.1), &inv);
        assert_eq!(kind, TreasureKind::MajorRelic);
    }

    #[test]
    fn test_minor_relic_requires_owned_effect() {
        let mut rng = SequenceRng::constant(0.0);
        assert!(generate_minor_relic(&mut rng, &Inventory::new(), 1).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_minor_relic_upgrades_owned_effect() {
        let inv = inventory_with(EffectKind::Barrier);
        let relic = generate_minor_relic(&mut SequenceRng::constant(0.0), &inv, 4).unwrap();
        assert_eq!(relic.id, "minor_relic_barrier_4");
        assert_eq!(relic.upgrade_target, Some(EffectKind::Barrier));
    }

    #[test]
    fn test_minor_relic_ids_unique_against_same_inventory() {
        let mut generator = RewardGenerator::builtin();
        let inv = inventory_with(EffectKind::MaxHpBoost);
        // every roll lands on a minor relic for max hp
        let mut rng = SequenceRng::constant(0.1);

        let room = generator.generate_room_reward(&mut rng, &inv);
        let choices = generator.generate_treasure_choices(2, &mut rng, &inv);

        assert_eq!(room.treasure.id, "minor_relic_maxHpBoost_1");
        assert_eq!(choices[0].id, "minor_relic_maxHpBoost_2");
        assert_eq!(choices[1].id, "minor_relic_maxHpBoost_3");
        assert_eq!(generator.issued(), 3);
    }

    #[test]
    fn test_numbering_resumes_from_issued() {
        let mut generator = RewardGenerator::builtin().with_issued(7);
        let inv = inventory_with(EffectKind::MaxHpBoost);
        let treasure = generator.generate_treasure(&mut SequenceRng::new(vec![0.1, 0.0]), &inv);
        assert_eq!(treasure.id, "minor_relic_maxHpBoost_8");
    }

    #[test]
    fn test_generate_treasure_filters_by_kind() {
        let mut generator = RewardGenerator::builtin();
        // 0.75 -> consumable, then first consumable
        let mut rng = SequenceRng::new(vec![0.75, 0.0]);
        let treasure = generator.generate_treasure(&mut rng, &Inventory::new());

        assert_eq!(treasure.kind, TreasureKind::Consumable);
        assert_eq!(treasure.id, "consumable_hp_potion");
    }

    #[test]
    fn test_minor_roll_without_upgrades_uses_whole_pool() {
        let mut generator = RewardGenerator::builtin();
        // 0.95 -> minor relic, nothing to upgrade, 0.99 -> last pool entry
        let mut rng = SequenceRng::new(vec![0.95, 0.99]);
        let treasure = generator.generate_treasure(&mut rng, &Inventory::new());

        assert_eq!(treasure.id, TREASURE_POOL.last().unwrap().id);
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_minor_roll_with_upgrade_returns_relic() {
        let mut generator = RewardGenerator::builtin();
        let inv = inventory_with(EffectKind::MaxHpBoost);
        let mut rng = SequenceRng::new(vec![0.1, 0.0]);
        let treasure = generator.generate_treasure(&mut rng, &inv);

        assert_eq!(treasure.kind, TreasureKind::MinorRelic);
        assert_eq!(treasure.id, "minor_relic_maxHpBoost_1");
    }

    #[test]
    fn test_empty_pool_falls_back() {
        let mut generator = RewardGenerator::new(&[]);
        let treasure = generator.generate_treasure(&mut SequenceRng::constant(0.0), &Inventory::new());
        assert_eq!(treasure, TREASURE_POOL[0]);
    }

    #[test]
    fn test_choices_count() {
        let mut generator = RewardGenerator::builtin();
        let mut rng = game_core::PcgRng::seeded(7);
        let choices = generator.generate_treasure_choices(3, &mut rng, &Inventory::new());
        assert_eq!(choices.len(), 3);
    }
}
