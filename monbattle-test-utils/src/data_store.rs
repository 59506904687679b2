use std::env;

use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use monbattle_data::{
    BallData,
    BattleModification,
    DataStore,
    Id,
    LocalDataStore,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Environment variable that overrides the location of the reference catalogs.
const DATA_DIR_ENV: &str = "DATA_DIR";

/// Wrapper around a [`LocalDataStore`] for testing.
///
/// Allows fake moves and species to be inserted exclusively for the test, which is useful for
/// tests that focus on a single formula rather than the shipped catalogs.
pub struct TestDataStore {
    local: LocalDataStore,
    fake_moves: HashMap<Id, MoveData>,
    fake_species: HashMap<Id, SpeciesData>,
}

impl TestDataStore {
    pub fn new(local: LocalDataStore) -> Self {
        Self {
            local,
            fake_moves: HashMap::new(),
            fake_species: HashMap::new(),
        }
    }

    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Ok(Self::new(LocalDataStore::new_from_env(env_var)?))
    }

    pub fn add_fake_move(&mut self, move_data: MoveData) {
        self.fake_moves
            .insert(Id::from(move_data.name.as_str()), move_data);
    }

    pub fn add_fake_species(&mut self, species: SpeciesData) {
        self.fake_species
            .insert(Id::from(species.name.as_str()), species);
    }
}

impl DataStore for TestDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        self.local.get_type_chart()
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        match self.fake_species.get(id) {
            Some(species) => Ok(Some(species.clone())),
            None => self.local.get_species(id),
        }
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        match self.fake_moves.get(id) {
            Some(move_data) => Ok(Some(move_data.clone())),
            None => self.local.get_move(id),
        }
    }

    fn get_ball(&self, id: &Id) -> Result<Option<BallData>> {
        self.local.get_ball(id)
    }

    fn get_modification(&self, id: &Id) -> Result<Option<BattleModification>> {
        self.local.get_modification(id)
    }
}

/// Loads the reference catalogs for tests.
///
/// Reads from `DATA_DIR` if set, otherwise from the `data` directory at the workspace root.
pub fn test_data_store() -> Result<TestDataStore> {
    match env::var(DATA_DIR_ENV) {
        Ok(_) => TestDataStore::new_from_env(DATA_DIR_ENV),
        Err(_) => Ok(TestDataStore::new(LocalDataStore::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../data"
        ))?)),
    }
}
