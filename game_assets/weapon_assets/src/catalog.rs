use crate::{
    AffectedBy, BaseStats, ProjectilePattern, StatField, UpgradeStep, WeaponArchetype,
    WeaponDefinition, WeaponRegistry,
};

impl WeaponRegistry {
    /// Compiled-in weapon catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            magic_bolt(),
            twin_fangs(),
            scattershot(),
            seeker_swarm(),
            sanctum_aura(),
            guardian_drones(),
            proximity_mine(),
        ])
    }
}

fn magic_bolt() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "magic_bolt".into(),
        display_name: "Magic Bolt".into(),
        archetype: WeaponArchetype::Projectile(ProjectilePattern::Aimed),
        base_stats: BaseStats {
            damage: 10.0,
            cooldown: 1.2,
            speed: 320.0,
            duration: 1.5,
            area: 400.0,
            size: 1.0,
            amount: 1.0,
            pierce: 1.0,
            knockback: 2.0,
        },
        affected_by: AffectedBy::ALL,
        max_level: 8,
        upgrades: vec![
            UpgradeStep::add(2, Amount, 1.0),
            UpgradeStep::add(3, Damage, 5.0),
            UpgradeStep::set(4, Cooldown, 1.0),
            UpgradeStep::add(5, Amount, 1.0),
            UpgradeStep::add(6, Damage, 5.0),
            UpgradeStep::add(6, Pierce, 1.0),
            UpgradeStep::set(7, Cooldown, 0.8),
            UpgradeStep::add(8, Damage, 10.0),
            UpgradeStep::add(8, Amount, 1.0),
        ],
    }
}

fn twin_fangs() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "twin_fangs".into(),
        display_name: "Twin Fangs".into(),
        archetype: WeaponArchetype::Projectile(ProjectilePattern::Directional),
        base_stats: BaseStats {
            damage: 8.0,
            cooldown: 1.0,
            speed: 450.0,
            duration: 0.8,
            area: 250.0,
            size: 1.0,
            amount: 2.0,
            pierce: 1.0,
            knockback: 1.0,
        },
        affected_by: AffectedBy::ALL,
        max_level: 6,
        upgrades: vec![
            UpgradeStep::add(2, Damage, 3.0),
            UpgradeStep::add(3, Amount, 1.0),
            UpgradeStep::add(4, Speed, 50.0),
            UpgradeStep::add(4, Pierce, 1.0),
            UpgradeStep::add(5, Amount, 1.0),
            UpgradeStep::add(6, Damage, 6.0),
            UpgradeStep::set(6, Cooldown, 0.8),
        ],
    }
}

fn scattershot() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "scattershot".into(),
        display_name: "Scattershot".into(),
        archetype: WeaponArchetype::Projectile(ProjectilePattern::Spread),
        base_stats: BaseStats {
            damage: 6.0,
            cooldown: 1.6,
            speed: 380.0,
            duration: 0.6,
            area: 220.0,
            size: 1.0,
            amount: 5.0,
            pierce: 1.0,
            knockback: 4.0,
        },
        affected_by: AffectedBy::ALL,
        max_level: 6,
        upgrades: vec![
            UpgradeStep::add(2, Amount, 1.0),
            UpgradeStep::add(3, Damage, 2.0),
            UpgradeStep::add(4, Amount, 2.0),
            UpgradeStep::add(4, Knockback, 2.0),
            UpgradeStep::set(5, Cooldown, 1.3),
            UpgradeStep::add(6, Damage, 4.0),
            UpgradeStep::add(6, Amount, 2.0),
        ],
    }
}

fn seeker_swarm() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "seeker_swarm".into(),
        display_name: "Seeker Swarm".into(),
        archetype: WeaponArchetype::Projectile(ProjectilePattern::Homing),
        base_stats: BaseStats {
            damage: 7.0,
            cooldown: 2.0,
            speed: 260.0,
            duration: 3.0,
            area: 500.0,
            size: 0.8,
            amount: 3.0,
            pierce: 0.0,
            knockback: 0.0,
        },
        affected_by: AffectedBy {
            speed: false,
            ..AffectedBy::ALL
        },
        max_level: 6,
        upgrades: vec![
            UpgradeStep::add(2, Amount, 1.0),
            UpgradeStep::add(3, Damage, 3.0),
            UpgradeStep::add(4, Duration, 1.0),
            UpgradeStep::add(5, Amount, 2.0),
            UpgradeStep::set(6, Cooldown, 1.5),
            UpgradeStep::add(6, Damage, 5.0),
        ],
    }
}

fn sanctum_aura() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "sanctum_aura".into(),
        display_name: "Sanctum Aura".into(),
        archetype: WeaponArchetype::Aura,
        base_stats: BaseStats {
            damage: 4.0,
            cooldown: 0.5,
            speed: 0.0,
            duration: 0.0,
            area: 90.0,
            size: 1.0,
            amount: 1.0,
            pierce: 0.0,
            knockback: 0.5,
        },
        affected_by: AffectedBy {
            damage: true,
            area: true,
            cooldown: true,
            ..AffectedBy::default()
        },
        max_level: 6,
        upgrades: vec![
            UpgradeStep::add(2, Area, 15.0),
            UpgradeStep::add(3, Damage, 2.0),
            UpgradeStep::add(4, Area, 15.0),
            UpgradeStep::set(4, Cooldown, 0.4),
            UpgradeStep::add(5, Damage, 3.0),
            UpgradeStep::add(6, Area, 30.0),
            UpgradeStep::add(6, Knockback, 1.0),
        ],
    }
}

fn guardian_drones() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "guardian_drones".into(),
        display_name: "Guardian Drones".into(),
        archetype: WeaponArchetype::Orbit,
        base_stats: BaseStats {
            damage: 12.0,
            cooldown: 3.0,
            speed: 180.0,
            duration: 2.5,
            area: 80.0,
            size: 1.0,
            amount: 2.0,
            pierce: 0.0,
            knockback: 3.0,
        },
        affected_by: AffectedBy::ALL,
        max_level: 8,
        upgrades: vec![
            UpgradeStep::add(2, Amount, 1.0),
            UpgradeStep::add(3, Damage, 4.0),
            UpgradeStep::add(3, Area, 10.0),
            UpgradeStep::add(4, Duration, 0.5),
            UpgradeStep::add(5, Amount, 1.0),
            UpgradeStep::add(6, Speed, 40.0),
            UpgradeStep::add(6, Damage, 4.0),
            UpgradeStep::set(7, Cooldown, 2.5),
            UpgradeStep::add(8, Amount, 1.0),
            UpgradeStep::add(8, Area, 20.0),
        ],
    }
}

fn proximity_mine() -> WeaponDefinition {
    use StatField::*;
    WeaponDefinition {
        id: "proximity_mine".into(),
        display_name: "Proximity Mine".into(),
        archetype: WeaponArchetype::Deployable,
        base_stats: BaseStats {
            damage: 40.0,
            cooldown: 4.0,
            speed: 0.0,
            duration: 10.0,
            area: 120.0,
            size: 1.0,
            amount: 1.0,
            pierce: 0.0,
            knockback: 10.0,
        },
        affected_by: AffectedBy {
            speed: false,
            ..AffectedBy::ALL
        },
        max_level: 6,
        upgrades: vec![
            UpgradeStep::add(2, Damage, 10.0),
            UpgradeStep::add(3, Area, 20.0),
            UpgradeStep::add(4, Amount, 1.0),
            UpgradeStep::set(5, Cooldown, 3.5),
            UpgradeStep::add(5, Duration, 5.0),
            UpgradeStep::add(6, Damage, 20.0),
            UpgradeStep::add(6, Area, 30.0),
        ],
    }
}
