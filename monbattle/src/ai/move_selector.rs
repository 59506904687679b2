use std::{
    slice,
    str::FromStr,
};

use anyhow::Result;
use itertools::Itertools;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    BattleModification,
    DataStore,
    Id,
    MoveData,
    MovePreference,
    PreferenceKind,
    Stat,
    Type,
    battle::BattleContext,
    config::AiOptions,
    error::{
        WrapOptionError,
        invalid_input_error,
    },
    mons::{
        Mon,
        MoveSlot,
    },
};

/// Modification applied first, to trainer classes that favor stat changes and particular moves.
pub const TURN_TWO_MODIFICATION: &str = "Turn 2";
/// Modification applied second, to trainer classes that consider type matchups.
pub const GOOD_AI_MODIFICATION: &str = "Good AI";

const BASE_PRIORITY: i32 = 10;
const STATUS_PENALTY: i32 = 5;

/// Chooses the move an opposing Mon uses on its turn.
///
/// Every move starts at the same priority, and lower priority is preferred. Penalties and battle
/// modifications nudge individual moves, and the final choice is uniform among the moves tied at
/// the lowest priority.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    options: AiOptions,
    modifications: Vec<BattleModification>,
}

impl MoveSelector {
    /// Creates a new move selector.
    ///
    /// Modifications are applied in the given order.
    pub fn new(options: AiOptions, modifications: Vec<BattleModification>) -> Self {
        Self {
            options,
            modifications,
        }
    }

    /// Creates a move selector using the standard modifications from the data store.
    ///
    /// A modification missing from the data store is skipped.
    pub fn from_data_store(options: AiOptions, data: &dyn DataStore) -> Result<Self> {
        let mut modifications = Vec::new();
        for name in [TURN_TWO_MODIFICATION, GOOD_AI_MODIFICATION] {
            match data.get_modification(&Id::from(name))? {
                Some(modification) => modifications.push(modification),
                None => log::warn!("battle modification {name} not found, skipping"),
            }
        }
        Ok(Self::new(options, modifications))
    }

    /// Selects a move for `user` to use against `target`.
    pub fn select_move<'m>(
        &self,
        context: &BattleContext,
        user: &'m Mon,
        target: &Mon,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<&'m MoveSlot> {
        if user.moves.is_empty() {
            return Err(invalid_input_error(format!(
                "{} has no moves to select",
                user.nickname
            )));
        }
        if !context.is_trainer_battle() {
            let selected = rand_util::sample_slice(prng, &user.moves)
                .wrap_expectation("failed to sample a move")?;
            log::debug!("wild {} selected {}", user.nickname, selected.name());
            return Ok(selected);
        }

        let priorities = self.move_priorities(context, user, target);
        let candidates = user
            .moves
            .iter()
            .zip(priorities)
            .min_set_by_key(|(_, priority)| *priority)
            .into_iter()
            .map(|(slot, _)| slot)
            .collect::<Vec<_>>();
        let selected = *rand_util::sample_slice(prng, &candidates)
            .wrap_expectation("failed to sample a move")?;
        log::debug!(
            "{} selected {} out of {:?}",
            user.nickname,
            selected.name(),
            candidates.iter().map(|slot| slot.name()).collect::<Vec<_>>()
        );
        Ok(selected)
    }

    /// Calculates the priority of each of the user's moves in a trainer battle.
    pub fn move_priorities(&self, context: &BattleContext, user: &Mon, target: &Mon) -> Vec<i32> {
        let mut priorities = vec![BASE_PRIORITY; user.moves.len()];

        if target.status.is_some() && !context.trainer_is_dumb() {
            for (slot, priority) in user.moves.iter().zip(priorities.iter_mut()) {
                if slot.data.purely_status_inflicting() {
                    *priority += STATUS_PENALTY;
                }
            }
        }

        if let Some(trainer_class) = context.trainer_class() {
            for modification in &self.modifications {
                if !modification.applies_to(trainer_class) {
                    continue;
                }
                for (slot, priority) in user.moves.iter().zip(priorities.iter_mut()) {
                    if let Some(adjustment) =
                        self.preference_adjustment(modification, &slot.data, target)
                    {
                        *priority += adjustment;
                    }
                }
            }
        }

        log::trace!("move priorities for {}: {priorities:?}", user.nickname);
        priorities
    }

    /// Walks the modification's preferences in order, stopping at the first match.
    fn preference_adjustment(
        &self,
        modification: &BattleModification,
        move_data: &MoveData,
        target: &Mon,
    ) -> Option<i32> {
        modification.preferences.iter().find_map(|preference| {
            let kinds = if self.options.switch_fallthrough {
                preference.kind.fallthrough()
            } else {
                slice::from_ref(&preference.kind)
            };
            kinds
                .iter()
                .find(|kind| self.preference_matches(**kind, preference, move_data, target))
                .map(|kind| kind.priority_adjustment())
        })
    }

    /// Evaluates the condition for `kind` against the preference's arguments.
    ///
    /// `kind` may differ from the preference's own kind when preferences fall through.
    fn preference_matches(
        &self,
        kind: PreferenceKind,
        preference: &MovePreference,
        move_data: &MoveData,
        target: &Mon,
    ) -> bool {
        match kind {
            PreferenceKind::Move => {
                Id::from(preference.subject.as_str()) == Id::from(move_data.name.as_str())
            }
            PreferenceKind::Raise => {
                Stat::from_str(&preference.subject).is_ok_and(|stat| move_data.raises(stat))
            }
            PreferenceKind::Lower => {
                Stat::from_str(&preference.subject).is_ok_and(|stat| move_data.lowers(stat))
            }
            PreferenceKind::Super | PreferenceKind::Weak => {
                let attacking = preference
                    .object
                    .as_deref()
                    .and_then(|object| Type::from_str(object).ok());
                if attacking != Some(move_data.primary_type) {
                    return false;
                }
                self.options.legacy_type_membership
                    || Type::from_str(&preference.subject)
                        .is_ok_and(|defending| target.has_type(defending))
            }
        }
    }
}
