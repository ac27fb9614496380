use crate::audio::SoundEffect;
use crate::game::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesId {
    GreyMouse,
    BrownMouse,
    WhiteMouse,
    BossMouse,
    DesertBoarman,
    DesertWolf,
    DesertWartotaur,
    DesertBoss,
    BurntImp,
    BurntSuccubus,
    BurntFallenAngel,
    Dragon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rank {
    Basic,
    Boss {
        ultimate_cooldown: u32,
        ultimate_damage_multiplier: i32,
    },
    FinalBoss {
        ultimate_cooldown: u32,
        ultimate_damage_multiplier: i32,
    },
}

impl Rank {
    /// Ultimate cooldown max and damage multiplier, for ranks that have one.
    pub fn ultimate(&self) -> Option<(u32, i32)> {
        match *self {
            Rank::Basic => None,
            Rank::Boss { ultimate_cooldown, ultimate_damage_multiplier }
            | Rank::FinalBoss { ultimate_cooldown, ultimate_damage_multiplier } => {
                Some((ultimate_cooldown, ultimate_damage_multiplier))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpeciesDef {
    pub name: &'static str,
    pub tag: char,
    pub zone: Zone,
    pub damage: i32,
    pub health: i32,
    pub xp: u32,
    pub speed: f32,
    pub attack_cooldown: u32,
    pub rank: Rank,
    pub hit_sound: SoundEffect,
}

impl SpeciesId {
    pub const ALL: [SpeciesId; 12] = [
        SpeciesId::GreyMouse,
        SpeciesId::BrownMouse,
        SpeciesId::WhiteMouse,
        SpeciesId::BossMouse,
        SpeciesId::DesertBoarman,
        SpeciesId::DesertWolf,
        SpeciesId::DesertWartotaur,
        SpeciesId::DesertBoss,
        SpeciesId::BurntImp,
        SpeciesId::BurntSuccubus,
        SpeciesId::BurntFallenAngel,
        SpeciesId::Dragon,
    ];

    pub fn from_tag(tag: char) -> Option<SpeciesId> {
        SpeciesId::ALL.iter().copied().find(|id| id.def().tag == tag)
    }

    pub fn def(self) -> &'static SpeciesDef {
        match self {
            SpeciesId::GreyMouse => &SpeciesDef {
                name: "Grey Mouse",
                tag: 'e',
                zone: Zone::Plains,
                damage: 2,
                health: 10,
                xp: 2,
                speed: 1.35,
                attack_cooldown: 175,
                rank: Rank::Basic,
                hit_sound: SoundEffect::MouseHit,
            },
            SpeciesId::BrownMouse => &SpeciesDef {
                name: "Brown Mouse",
                tag: 'a',
                zone: Zone::Plains,
                damage: 6,
                health: 20,
                xp: 5,
                speed: 2.0,
                attack_cooldown: 100,
                rank: Rank::Basic,
                hit_sound: SoundEffect::MouseHit,
            },
            SpeciesId::WhiteMouse => &SpeciesDef {
                name: "White Mouse",
                tag: 's',
                zone: Zone::Plains,
                damage: 15,
                health: 30,
                xp: 10,
                speed: 2.25,
                attack_cooldown: 80,
                rank: Rank::Basic,
                hit_sound: SoundEffect::MouseHit,
            },
            SpeciesId::BossMouse => &SpeciesDef {
                name: "Boss Mouse",
                tag: 'm',
                zone: Zone::Plains,
                damage: 25,
                health: 200,
                xp: 100,
                speed: 2.5,
                attack_cooldown: 50,
                rank: Rank::Boss { ultimate_cooldown: 100, ultimate_damage_multiplier: 3 },
                hit_sound: SoundEffect::MouseHit,
            },
            SpeciesId::DesertBoarman => &SpeciesDef {
                name: "Desert Boarman",
                tag: 'b',
                zone: Zone::Desert,
                damage: 25,
                health: 225,
                xp: 75,
                speed: 2.25,
                attack_cooldown: 80,
                rank: Rank::Basic,
                hit_sound: SoundEffect::DesertHit,
            },
            SpeciesId::DesertWolf => &SpeciesDef {
                name: "Desert Wolf",
                tag: 'w',
                zone: Zone::Desert,
                damage: 35,
                health: 250,
                xp: 100,
                speed: 2.75,
                attack_cooldown: 60,
                rank: Rank::Basic,
                hit_sound: SoundEffect::DesertHit,
            },
            SpeciesId::DesertWartotaur => &SpeciesDef {
                name: "Desert Wartotaur",
                tag: 'W',
                zone: Zone::Desert,
                damage: 55,
                health: 500,
                xp: 250,
                speed: 2.5,
                attack_cooldown: 80,
                rank: Rank::Basic,
                hit_sound: SoundEffect::DesertHit,
            },
            SpeciesId::DesertBoss => &SpeciesDef {
                name: "Desert Boss",
                tag: 'M',
                zone: Zone::Desert,
                damage: 40,
                health: 2500,
                xp: 1000,
                speed: 3.0,
                attack_cooldown: 25,
                rank: Rank::Boss { ultimate_cooldown: 200, ultimate_damage_multiplier: 5 },
                hit_sound: SoundEffect::DesertBossHit,
            },
            SpeciesId::BurntImp => &SpeciesDef {
                name: "Burnt Imp",
                tag: 'i',
                zone: Zone::Scorched,
                damage: 75,
                health: 750,
                xp: 375,
                speed: 3.0,
                attack_cooldown: 60,
                rank: Rank::Basic,
                hit_sound: SoundEffect::BurntHit,
            },
            SpeciesId::BurntSuccubus => &SpeciesDef {
                name: "Burnt Succubus",
                tag: 'u',
                zone: Zone::Scorched,
                damage: 100,
                health: 1500,
                xp: 750,
                speed: 3.25,
                attack_cooldown: 60,
                rank: Rank::Basic,
                hit_sound: SoundEffect::SuccubusHit,
            },
            SpeciesId::BurntFallenAngel => &SpeciesDef {
                name: "Burnt Fallen Angel",
                tag: 'f',
                zone: Zone::Scorched,
                damage: 150,
                health: 3500,
                xp: 1500,
                speed: 3.5,
                attack_cooldown: 25,
                rank: Rank::Basic,
                hit_sound: SoundEffect::FallenAngelHit,
            },
            SpeciesId::Dragon => &SpeciesDef {
                name: "Dragon",
                tag: 'd',
                zone: Zone::BossRoom,
                damage: 200,
                health: 9999,
                xp: 5000,
                speed: 3.5,
                attack_cooldown: 75,
                rank: Rank::FinalBoss { ultimate_cooldown: 100, ultimate_damage_multiplier: 10 },
                hit_sound: SoundEffect::DragonHit,
            },
        }
    }
}
