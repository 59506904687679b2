use anyhow::Result;
use monbattle_prng::PseudoRandomNumberGenerator;

use crate::{
    DataStore,
    ExperienceType,
    Id,
    MoveData,
    SpeciesData,
    StatTable,
    Status,
    Type,
    battle::{
        calculate_mon_stats,
        validate_level,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        invalid_input_error,
    },
    mons::{
        ExperienceRecord,
        Ivs,
    },
};

/// Lowest level a Mon can be.
pub const MIN_LEVEL: u8 = 1;
/// Highest level a Mon can reach.
pub const MAX_LEVEL: u8 = 100;
/// Number of moves a Mon can know at once.
pub const MAX_MOVES: usize = 4;

/// A single move known by a Mon.
#[derive(Debug, Clone)]
pub struct MoveSlot {
    pub data: MoveData,
    /// Remaining power points.
    pub pp: u8,
}

impl MoveSlot {
    /// Creates a move slot at full PP.
    pub fn new(data: MoveData) -> Self {
        Self { pp: data.pp, data }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}

/// A Mon taking part in battle.
///
/// Stats are kept twice: `stats` are the working values a battle may modify, and `normal_stats`
/// are the values derived from level, IVs and EVs. Both are refreshed on level up.
#[derive(Debug, Clone)]
pub struct Mon {
    pub species: SpeciesData,
    pub nickname: String,
    pub level: u8,
    pub moves: Vec<MoveSlot>,
    pub ivs: Ivs,
    pub evs: StatTable,
    pub stats: StatTable,
    pub normal_stats: StatTable,
    pub hp: u16,
    pub status: Option<Status>,
    pub experience: ExperienceRecord,
    /// Was this Mon obtained by trade? Traded Mons earn boosted experience.
    pub traded: bool,
    /// Is a critical-hit boosting condition active on this Mon?
    pub critical_hit_boost: bool,
}

impl Mon {
    /// Creates a Mon at full HP with zero EVs.
    pub fn new(species: SpeciesData, level: u8, ivs: Ivs, moves: Vec<MoveData>) -> Result<Self> {
        validate_level(level)?;
        if moves.len() > MAX_MOVES {
            return Err(invalid_input_error(format!(
                "{} cannot know {} moves",
                species.name,
                moves.len()
            )));
        }
        if species.experience_type.is_none() {
            log::warn!(
                "{} has no experience type, defaulting to {}",
                species.name,
                ExperienceType::default()
            );
        }

        let evs = StatTable::default();
        let stats = calculate_mon_stats(&species.base_stats, &ivs, &evs, level)
            .wrap_error_with_format(format_args!("failed to calculate stats for {}", species.name))?;
        let experience = ExperienceRecord::new(species.experience_type(), level);
        Ok(Self {
            nickname: species.name.clone(),
            species,
            level,
            moves: moves.into_iter().map(MoveSlot::new).collect(),
            ivs,
            evs,
            hp: stats.hp,
            normal_stats: stats.clone(),
            stats,
            status: None,
            experience,
            traded: false,
            critical_hit_boost: false,
        })
    }

    /// Generates a fresh Mon of the given species, as for a wild encounter or a trainer roster.
    ///
    /// IVs are rolled, and the Mon knows the last four natural moves it would have learned by its
    /// level.
    pub fn generate(
        data: &dyn DataStore,
        species: &str,
        level: u8,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self> {
        validate_level(level)?;
        let species = data
            .get_species(&Id::from(species))?
            .wrap_not_found_error_with_format(format_args!("species {species}"))?;
        let moves = species
            .learnset
            .natural_moves_at_level(level, MAX_MOVES)
            .into_iter()
            .map(|name| {
                data.get_move(&Id::from(name))?
                    .wrap_not_found_error_with_format(format_args!("move {name}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let ivs = Ivs::roll(prng);
        log::debug!("generated level {level} {} with {ivs:?}", species.name);
        Self::new(species, level, ivs, moves)
    }

    pub fn types(&self) -> Vec<Type> {
        self.species.types()
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.species.has_type(typ)
    }

    /// Maximum HP.
    pub fn max_hp(&self) -> u16 {
        self.normal_stats.hp
    }

    pub fn experience_type(&self) -> ExperienceType {
        self.species.experience_type()
    }

    /// Raises the Mon's level by one.
    ///
    /// All stats are recalculated, and current HP rises by the same amount as max HP. Returns
    /// `false` without changes if the Mon is already at the maximum level.
    pub fn level_up(&mut self) -> Result<bool> {
        if self.level >= MAX_LEVEL {
            return Ok(false);
        }
        let level = self.level + 1;
        let stats = calculate_mon_stats(&self.species.base_stats, &self.ivs, &self.evs, level)?;
        let max_hp_gain = stats.hp.saturating_sub(self.max_hp());

        self.level = level;
        self.hp = self.hp.saturating_add(max_hp_gain).min(stats.hp);
        self.normal_stats = stats.clone();
        self.stats = stats;

        let experience_type = self.experience_type();
        let current = self
            .experience
            .current
            .max(experience_type.exp_at_level(level));
        self.experience = ExperienceRecord::with_current(experience_type, level, current);

        log::debug!("{} grew to level {level}", self.nickname);
        Ok(true)
    }

    /// Adds experience, leveling up as many times as the new total allows.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> Result<u8> {
        let current = self.experience.current.saturating_add(amount);
        self.experience =
            ExperienceRecord::with_current(self.experience_type(), self.level, current);
        let reached = self.experience_type().level_from_exp(current);
        let mut levels = 0;
        while self.level < reached && self.level_up()? {
            levels += 1;
        }
        Ok(levels)
    }
}

#[cfg(test)]
mod mon_test {
    use assert_matches::assert_matches;
    use monbattle_test_utils::{
        ControlledRandomNumberGenerator,
        assert_error_message,
        test_data_store,
    };

    use crate::{
        DataStoreByName,
        ExperienceType,
        StatTable,
        error::{
            is_invalid_input,
            is_not_found,
        },
        mons::{
            ExperienceRecord,
            Ivs,
            MAX_LEVEL,
            Mon,
        },
    };

    fn pikachu(level: u8) -> Mon {
        let data = test_data_store().unwrap();
        let mut prng = ControlledRandomNumberGenerator::with_values([9, 8, 15, 0]);
        Mon::generate(&data, "Pikachu", level, &mut prng).unwrap()
    }

    #[test]
    fn generates_level_10_pikachu() {
        let mon = pikachu(10);
        assert_eq!(mon.ivs, Ivs::new(9, 8, 15, 0));
        assert_eq!(mon.evs, StatTable::default());
        pretty_assertions::assert_eq!(
            mon.normal_stats,
            StatTable {
                hp: 29,
                atk: 17,
                def: 12,
                spc: 15,
                spe: 26,
            }
        );
        assert_eq!(mon.stats, mon.normal_stats);
        assert_eq!(mon.hp, 29);
        assert_eq!(mon.status, None);
        assert_eq!(
            mon.moves.iter().map(|slot| slot.name()).collect::<Vec<_>>(),
            vec!["Thunder Shock", "Growl", "Thunder Wave"]
        );
        assert!(mon.moves.iter().all(|slot| slot.pp == slot.data.pp));
        pretty_assertions::assert_eq!(
            mon.experience,
            ExperienceRecord {
                current: 1000,
                next: 1331,
                remaining: 331,
            }
        );
    }

    #[test]
    fn keeps_last_four_natural_moves() {
        let mon = pikachu(43);
        assert_eq!(
            mon.moves.iter().map(|slot| slot.name()).collect::<Vec<_>>(),
            vec!["Quick Attack", "Swift", "Agility", "Thunder"]
        );
    }

    #[test]
    fn fails_for_unknown_species() {
        let data = test_data_store().unwrap();
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        assert_matches!(Mon::generate(&data, "Missingno", 5, &mut prng), Err(err) => {
            assert!(is_not_found(&err));
        });
    }

    #[test]
    fn fails_for_invalid_level() {
        let data = test_data_store().unwrap();
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        assert_matches!(Mon::generate(&data, "Pikachu", 0, &mut prng), Err(err) => {
            assert!(is_invalid_input(&err));
        });
        assert_error_message(
            Mon::generate(&data, "Pikachu", 101, &mut prng),
            "invalid input: level 101 is outside of [1, 100]",
        );
    }

    #[test]
    fn rejects_too_many_moves() {
        let data = test_data_store().unwrap();
        let species = data.get_species_by_name("Pikachu").unwrap().unwrap();
        let moves = ["Thunder Shock", "Growl", "Thunder Wave", "Quick Attack", "Swift"]
            .into_iter()
            .map(|name| data.get_move_by_name(name).unwrap().unwrap())
            .collect();
        assert_matches!(Mon::new(species, 20, Ivs::default(), moves), Err(err) => {
            assert!(is_invalid_input(&err));
        });
    }

    #[test]
    fn level_up_recalculates_stats_and_raises_hp() {
        let mut mon = pikachu(10);
        mon.hp = 20;
        assert!(mon.level_up().unwrap());
        assert_eq!(mon.level, 11);
        assert_eq!(mon.max_hp(), 30);
        assert_eq!(mon.hp, 21);
        assert_eq!(mon.stats, mon.normal_stats);
        pretty_assertions::assert_eq!(
            mon.experience,
            ExperienceRecord::new(ExperienceType::MediumFast, 11)
        );
    }

    #[test]
    fn level_up_stops_at_max_level() {
        let mut mon = pikachu(MAX_LEVEL);
        let stats = mon.normal_stats.clone();
        assert!(!mon.level_up().unwrap());
        assert_eq!(mon.level, MAX_LEVEL);
        assert_eq!(mon.normal_stats, stats);
    }

    #[test]
    fn gains_experience_without_leveling() {
        let mut mon = pikachu(10);
        assert_eq!(mon.gain_experience(330).unwrap(), 0);
        assert_eq!(mon.level, 10);
        pretty_assertions::assert_eq!(
            mon.experience,
            ExperienceRecord {
                current: 1330,
                next: 1331,
                remaining: 1,
            }
        );
    }

    #[test]
    fn levels_up_on_exact_threshold() {
        let mut mon = pikachu(10);
        assert_eq!(mon.gain_experience(331).unwrap(), 1);
        assert_eq!(mon.level, 11);
        assert_eq!(mon.experience.current, 1331);
    }

    #[test]
    fn gains_multiple_levels() {
        let mut mon = pikachu(10);
        assert_eq!(mon.gain_experience(1000).unwrap(), 2);
        assert_eq!(mon.level, 12);
        pretty_assertions::assert_eq!(
            mon.experience,
            ExperienceRecord {
                current: 2000,
                next: 2197,
                remaining: 197,
            }
        );
    }
}
