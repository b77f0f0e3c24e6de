use game_core::{
    AiKind, BossDefinition, EffectKind, EffectValue, EnemyDefinition, Rarity, Stats, Treasure,
    TreasureKind,
};

/// Boss spawned when a boss room names no boss.
pub const DEFAULT_BOSS_ID: &str = "dragon_lord";

pub fn default_enemies() -> Vec<EnemyDefinition> {
    vec![
        EnemyDefinition::new("goblin", "Goblin", 'g', Stats::new(30, 6, 2, 90), AiKind::Melee),
        EnemyDefinition::new(
            "skeleton",
            "Skeleton",
            's',
            Stats::new(35, 7, 3, 85),
            AiKind::Melee,
        ),
    ]
}

pub fn default_bosses() -> Vec<BossDefinition> {
    let armor = Treasure::new(
        "dragon_scale_armor",
        "Dragon Scale Armor",
        "Ancient dragon scales providing massive defense",
        Rarity::Epic,
        TreasureKind::MajorRelic,
        vec![
            EffectValue::new(EffectKind::DamageReduction, 5),
            EffectValue::new(EffectKind::MaxHpBoost, 50),
        ],
    );

    vec![BossDefinition {
        id: DEFAULT_BOSS_ID.to_string(),
        name: "Dragon Lord".to_string(),
        symbol: 'D',
        stats: Stats::new(150, 25, 10, 8),
        equipped_relics: vec![armor],
    }]
}
