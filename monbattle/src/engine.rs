use anyhow::Result;
use monbattle_prng::PseudoRandomNumberGenerator;

use crate::{
    BallData,
    DataStore,
    Id,
    MoveData,
    Type,
    TypeChart,
    ai::MoveSelector,
    battle::{
        BattleContext,
        CaptureOutcome,
        HitOutcome,
        experience_gained,
        resolve_capture,
        resolve_hit,
        type_effectiveness,
    },
    config::EngineOptions,
    error::{
        WrapOptionError,
        WrapResultError,
    },
    mons::{
        Mon,
        MoveSlot,
    },
};

/// Entry point for resolving battle decisions against a set of catalogs.
///
/// The engine owns no battle state. Mons and the [`BattleContext`] belong to the caller, which
/// applies each result to them.
pub struct BattleEngine<'d> {
    data: &'d dyn DataStore,
    options: EngineOptions,
    type_chart: TypeChart,
    move_selector: MoveSelector,
}

impl<'d> BattleEngine<'d> {
    /// Creates a new engine, loading the type chart and battle modifications up front.
    pub fn new(data: &'d dyn DataStore, options: EngineOptions) -> Result<Self> {
        let type_chart = data
            .get_type_chart()
            .wrap_error_with_message("failed to load type chart")?;
        let move_selector = MoveSelector::from_data_store(options.ai.clone(), data)
            .wrap_error_with_message("failed to load battle modifications")?;
        Ok(Self {
            data,
            options,
            type_chart,
            move_selector,
        })
    }

    pub fn data(&self) -> &'d dyn DataStore {
        self.data
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }

    /// Looks up a ball by name.
    pub fn ball(&self, name: &str) -> Result<BallData> {
        self.data
            .get_ball(&Id::from(name))?
            .wrap_not_found_error_with_format(format_args!("ball {name}"))
    }

    /// Looks up a move by name.
    pub fn move_data(&self, name: &str) -> Result<MoveData> {
        self.data
            .get_move(&Id::from(name))?
            .wrap_not_found_error_with_format(format_args!("move {name}"))
    }

    /// Generates a new Mon of the given species.
    pub fn generate_mon(
        &self,
        species: &str,
        level: u8,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Mon> {
        Mon::generate(self.data, species, level, prng)
    }

    /// Throws a ball, by name, at a wild Mon.
    pub fn throw_ball(
        &self,
        target: &Mon,
        ball: &str,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<CaptureOutcome> {
        let ball = self.ball(ball)?;
        resolve_capture(&self.options.capture, target, &ball, prng)
    }

    /// Attempts to flee, counting the attempt in the context.
    pub fn escape(
        &self,
        context: &mut BattleContext,
        fleeing: &Mon,
        opponent: &Mon,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> bool {
        context.attempt_escape(fleeing, opponent, prng)
    }

    /// Type effectiveness of a move type against a Mon.
    pub fn type_effectiveness(&self, move_type: Type, defender: &Mon) -> f64 {
        type_effectiveness(&self.type_chart, move_type, &defender.types())
    }

    /// Resolves a damaging move that connects.
    pub fn resolve_hit(
        &self,
        attacker: &Mon,
        defender: &Mon,
        move_data: &MoveData,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<HitOutcome> {
        resolve_hit(&self.type_chart, attacker, defender, move_data, prng)
    }

    /// Experience awarded for defeating a Mon.
    pub fn experience_gained(&self, context: &BattleContext, winner: &Mon, defeated: &Mon) -> u32 {
        experience_gained(context, winner, defeated)
    }

    /// Selects the move an opposing Mon uses this turn.
    pub fn select_move<'m>(
        &self,
        context: &BattleContext,
        user: &'m Mon,
        target: &Mon,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<&'m MoveSlot> {
        self.move_selector.select_move(context, user, target, prng)
    }
}
