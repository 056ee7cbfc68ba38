//! Static data tables for combat forms and enemy kinds
//!
//! Loaded once, immutable. Enemy kinds map 1:1 onto the absorbable forms:
//! the core dropped by a shattered enemy unlocks the form of the same
//! archetype. Only the default `Base` form has no enemy counterpart.

use serde::{Deserialize, Serialize};

/// Broad combat style of a form, used by the renderer to pick geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    Base,
    Striker,
    Ranged,
    Tank,
}

/// Identifier for a selectable combat form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormId {
    Base,
    Striker,
    Ranged,
    Tank,
}

/// A combat loadout: stats plus visual identity
#[derive(Debug, Clone)]
pub struct Form {
    pub id: FormId,
    pub name: &'static str,
    /// Movement speed consumed by the input layer (world units/s)
    pub speed: f32,
    pub damage: f32,
    pub melee_range: f32,
    pub attack_cooldown_ms: f64,
    /// Launch speed of this form's projectiles (world units/s)
    pub projectile_speed: f32,
    pub color: &'static str,
    pub archetype: Archetype,
}

/// All forms, indexed by `FormId as usize`
pub const FORMS: [Form; 4] = [
    Form {
        id: FormId::Base,
        name: "Wanderer",
        speed: 5.0,
        damage: 10.0,
        melee_range: 1.5,
        attack_cooldown_ms: 500.0,
        projectile_speed: 9.0,
        color: "#9D4EDD",
        archetype: Archetype::Base,
    },
    Form {
        id: FormId::Striker,
        name: "Striker",
        speed: 6.5,
        damage: 18.0,
        melee_range: 1.8,
        attack_cooldown_ms: 400.0,
        projectile_speed: 9.0,
        color: "#E63946",
        archetype: Archetype::Striker,
    },
    Form {
        id: FormId::Ranged,
        name: "Marksman",
        speed: 5.0,
        damage: 8.0,
        melee_range: 1.2,
        attack_cooldown_ms: 600.0,
        projectile_speed: 12.0,
        color: "#06FFA5",
        archetype: Archetype::Ranged,
    },
    Form {
        id: FormId::Tank,
        name: "Bulwark",
        speed: 3.5,
        damage: 14.0,
        melee_range: 2.2,
        attack_cooldown_ms: 900.0,
        projectile_speed: 7.0,
        color: "#4CC9F0",
        archetype: Archetype::Tank,
    },
];

impl FormId {
    /// Look up the static stats for this form
    pub fn data(self) -> &'static Form {
        &FORMS[self as usize]
    }
}

/// Identifier for an enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKindId {
    Striker,
    Ranged,
    Tank,
}

/// Static stats for one enemy kind
#[derive(Debug, Clone)]
pub struct EnemyKind {
    pub id: EnemyKindId,
    pub name: &'static str,
    pub max_health: f32,
    /// Pursuit speed (world units/s)
    pub speed: f32,
    pub contact_damage: f32,
    pub scale: f32,
    pub color: &'static str,
}

/// All enemy kinds, indexed by `EnemyKindId as usize`
pub const ENEMY_KINDS: [EnemyKind; 3] = [
    EnemyKind {
        id: EnemyKindId::Striker,
        name: "Shardling",
        max_health: 30.0,
        speed: 2.4,
        contact_damage: 8.0,
        scale: 0.8,
        color: "#E63946",
    },
    EnemyKind {
        id: EnemyKindId::Ranged,
        name: "Glimmer",
        max_health: 20.0,
        speed: 1.8,
        contact_damage: 5.0,
        scale: 0.7,
        color: "#06FFA5",
    },
    EnemyKind {
        id: EnemyKindId::Tank,
        name: "Monolith",
        max_health: 60.0,
        speed: 1.2,
        contact_damage: 12.0,
        scale: 1.2,
        color: "#4CC9F0",
    },
];

impl EnemyKindId {
    pub const ALL: [EnemyKindId; 3] = [EnemyKindId::Striker, EnemyKindId::Ranged, EnemyKindId::Tank];

    /// Look up the static stats for this kind
    pub fn data(self) -> &'static EnemyKind {
        &ENEMY_KINDS[self as usize]
    }

    /// The form a core of this kind unlocks when absorbed
    pub fn unlocks(self) -> FormId {
        match self {
            EnemyKindId::Striker => FormId::Striker,
            EnemyKindId::Ranged => FormId::Ranged,
            EnemyKindId::Tank => FormId::Tank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_lookup_matches_index() {
        for form in &FORMS {
            assert_eq!(form.id.data().id, form.id);
        }
    }

    #[test]
    fn test_enemy_kind_lookup_matches_index() {
        for kind in &ENEMY_KINDS {
            assert_eq!(kind.id.data().id, kind.id);
        }
    }

    #[test]
    fn test_every_kind_unlocks_its_archetype() {
        assert_eq!(EnemyKindId::Striker.unlocks().data().archetype, Archetype::Striker);
        assert_eq!(EnemyKindId::Ranged.unlocks().data().archetype, Archetype::Ranged);
        assert_eq!(EnemyKindId::Tank.unlocks().data().archetype, Archetype::Tank);
    }

    #[test]
    fn test_base_form_documented_stats() {
        let base = FormId::Base.data();
        assert_eq!(base.damage, 10.0);
        assert_eq!(base.melee_range, 1.5);
        assert_eq!(base.attack_cooldown_ms, 500.0);
    }
}
