use {
    crate::{WeaponConfigError, WeaponConfigResult, WeaponDefinition},
    bevy::{platform::collections::HashMap, prelude::*},
    serde::{Deserialize, Serialize},
    std::sync::OnceLock,
};

static INSTALLED_REGISTRY: OnceLock<WeaponRegistry> = OnceLock::new();

/// Returns the process-wide registry, falling back to the compiled-in catalog
/// if nothing was installed at startup.
pub fn weapon_registry() -> &'static WeaponRegistry {
    INSTALLED_REGISTRY.get_or_init(WeaponRegistry::builtin)
}

/// Validates `registry` and makes it the process-wide registry.
///
/// Fails if validation finds problems or if a registry is already in place
/// (including the builtin one, once anything has read it).
pub fn install_weapon_registry(registry: WeaponRegistry) -> WeaponConfigResult<()> {
    registry.validate()?;
    INSTALLED_REGISTRY
        .set(registry)
        .map_err(|_| WeaponConfigError::AlreadyInstalled)
}

/// Authored catalog layout: `(weapons: [ ... ])`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponDefinition>,
}

/// Read-only lookup of weapon definitions by id.
#[derive(Debug, Clone, Default)]
pub struct WeaponRegistry {
    definitions: Vec<WeaponDefinition>,
    index: HashMap<String, usize>,
}

impl WeaponRegistry {
    /// Builds a registry keeping declaration order. When ids repeat, lookups
    /// resolve to the first entry and [`validate`](Self::validate) reports it.
    pub fn new(definitions: Vec<WeaponDefinition>) -> Self {
        let mut index = HashMap::new();
        for (i, def) in definitions.iter().enumerate() {
            index.entry(def.id.clone()).or_insert(i);
        }
        Self { definitions, index }
    }

    pub fn from_ron(text: &str) -> WeaponConfigResult<Self> {
        let catalog: WeaponCatalog =
            ron::from_str(text).map_err(|e| WeaponConfigError::Parse {
                message: e.to_string(),
            })?;
        Ok(Self::new(catalog.weapons))
    }

    pub fn get(&self, id: &str) -> Option<&WeaponDefinition> {
        let found = self.index.get(id).map(|&i| &self.definitions[i]);
        if found.is_none() {
            warn!("Weapon type '{}' not found in registry", id);
        }
        found
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Checks every definition and returns all problems at once.
    pub fn validate(&self) -> WeaponConfigResult<()> {
        let mut problems = Vec::new();

        for (i, def) in self.definitions.iter().enumerate() {
            if self.index.get(&def.id) != Some(&i) {
                problems.push(WeaponConfigError::DuplicateId { id: def.id.clone() });
            }
            if def.max_level == 0 {
                problems.push(WeaponConfigError::InvalidMaxLevel { id: def.id.clone() });
            }
            for step in &def.upgrades {
                if step.level < 2 || step.level > def.max_level {
                    problems.push(WeaponConfigError::UpgradeLevelOutOfRange {
                        id: def.id.clone(),
                        level: step.level,
                        max_level: def.max_level,
                    });
                }
                if !step.value.is_finite() {
                    problems.push(WeaponConfigError::NonFiniteUpgradeValue {
                        id: def.id.clone(),
                        level: step.level,
                    });
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(WeaponConfigError::Invalid(problems))
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{AffectedBy, BaseStats, StatField, UpgradeOp, UpgradeStep, WeaponArchetype},
    };

    fn definition(id: &str, max_level: u32, upgrades: Vec<UpgradeStep>) -> WeaponDefinition {
        WeaponDefinition {
            id: id.to_string(),
            display_name: id.to_string(),
            archetype: WeaponArchetype::Aura,
            base_stats: BaseStats::default(),
            affected_by: AffectedBy::ALL,
            max_level,
            upgrades,
        }
    }

    const CATALOG: &str = r#"
        (
            weapons: [
                (
                    id: "frost_ring",
                    display_name: "Frost Ring",
                    archetype: "aura",
                    base_stats: (damage: 3.0, cooldown: 0.5, area: 80.0),
                    affected_by: (damage: true, area: true, cooldown: true),
                    max_level: 3,
                    upgrades: [
                        (level: 2, property: "baseStats.area", op: Add, value: 20.0),
                        (level: 3, property: "baseStats.damage", op: Set, value: 6.0),
                    ],
                ),
                (
                    id: "needle",
                    display_name: "Needle",
                    archetype: "projectile_spread",
                    base_stats: (damage: 2.0, amount: 4.0),
                    affected_by: (damage: false),
                    max_level: 1,
                ),
            ],
        )
    "#;

    #[test]
    fn test_from_ron() {
        let registry = WeaponRegistry::from_ron(CATALOG).expect("catalog should parse");
        assert_eq!(registry.len(), 2);
        registry.validate().expect("catalog should be valid");

        let ring = registry.get("frost_ring").expect("frost_ring should exist");
        assert_eq!(ring.archetype, WeaponArchetype::Aura);
        assert_eq!(ring.base_stats.area, 80.0);
        // Unlisted stats keep their defaults
        assert_eq!(ring.base_stats.size, 1.0);
        assert!(!ring.affected_by.speed);
        assert_eq!(ring.upgrades[0].property, StatField::Area);
        assert_eq!(ring.upgrades[1].op, UpgradeOp::Set);

        let needle = registry.get("needle").expect("needle should exist");
        assert!(needle.upgrades.is_empty());
        assert_eq!(needle.affected_by, AffectedBy::default());
    }

    #[test]
    fn test_from_ron_rejects_malformed_path() {
        let text = CATALOG.replace("baseStats.area", "baseStats.radius");
        let err = WeaponRegistry::from_ron(&text).unwrap_err();
        assert!(
            matches!(&err, WeaponConfigError::Parse { message } if message.contains("baseStats.radius")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_from_ron_rejects_unknown_archetype() {
        let text = CATALOG.replace("\"aura\"", "\"beam\"");
        let err = WeaponRegistry::from_ron(&text).unwrap_err();
        assert!(matches!(&err, WeaponConfigError::Parse { message } if message.contains("beam")));
    }

    #[test]
    fn test_unknown_id_returns_none() {
        let registry = WeaponRegistry::new(vec![definition("a", 1, vec![])]);
        assert!(registry.get("a").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let registry = WeaponRegistry::new(vec![
            definition(
                "a",
                3,
                vec![
                    UpgradeStep::add(1, StatField::Damage, 1.0),
                    UpgradeStep::add(4, StatField::Damage, 1.0),
                    UpgradeStep::set(3, StatField::Damage, f32::NAN),
                ],
            ),
            definition("a", 2, vec![]),
            definition("b", 0, vec![]),
        ]);

        let Err(WeaponConfigError::Invalid(problems)) = registry.validate() else {
            panic!("validation should fail");
        };
        assert_eq!(problems.len(), 5);
        assert!(problems.contains(&WeaponConfigError::UpgradeLevelOutOfRange {
            id: "a".into(),
            level: 1,
            max_level: 3
        }));
        assert!(problems.contains(&WeaponConfigError::UpgradeLevelOutOfRange {
            id: "a".into(),
            level: 4,
            max_level: 3
        }));
        assert!(problems.contains(&WeaponConfigError::NonFiniteUpgradeValue {
            id: "a".into(),
            level: 3
        }));
        assert!(problems.contains(&WeaponConfigError::DuplicateId { id: "a".into() }));
        assert!(problems.contains(&WeaponConfigError::InvalidMaxLevel { id: "b".into() }));

        // First declaration wins the lookup
        assert_eq!(registry.get("a").map(|d| d.max_level), Some(3));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let registry = WeaponRegistry::builtin();
        assert!(!registry.is_empty());
        registry.validate().expect("builtin catalog must validate");
    }
}
