use anyhow::Result;

use crate::{
    BallData,
    BattleModification,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all catalog data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
/// Catalogs are read-only: nothing in the engine writes back through this trait.
pub trait DataStore: Send + Sync {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
    /// Gets a ball by ID.
    fn get_ball(&self, id: &Id) -> Result<Option<BallData>>;
    /// Gets a battle modification by ID.
    fn get_modification(&self, id: &Id) -> Result<Option<BattleModification>>;
}

/// An extension of [`DataStore`] for looking up resources by name.
pub trait DataStoreByName: DataStore {
    /// Gets a species by name.
    fn get_species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        self.get_species(&Id::from(name))
    }
    /// Gets a move by name.
    fn get_move_by_name(&self, name: &str) -> Result<Option<MoveData>> {
        self.get_move(&Id::from(name))
    }
    /// Gets a ball by name.
    fn get_ball_by_name(&self, name: &str) -> Result<Option<BallData>> {
        self.get_ball(&Id::from(name))
    }
    /// Gets a battle modification by name.
    fn get_modification_by_name(&self, name: &str) -> Result<Option<BattleModification>> {
        self.get_modification(&Id::from(name))
    }
}

impl<T> DataStoreByName for T where T: DataStore + ?Sized {}
