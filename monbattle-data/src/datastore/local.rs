use std::{
    env,
    fs::File,
    path::Path,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;

use crate::{
    BallData,
    BattleModification,
    DataStore,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// All data is read once, when the store is created.
#[derive(Debug, Default, Clone)]
pub struct LocalDataStore {
    pub type_chart: TypeChart,
    pub balls: HashMap<Id, BallData>,
    pub modifications: HashMap<Id, BattleModification>,
    pub moves: HashMap<Id, MoveData>,
    pub species: HashMap<Id, SpeciesData>,
}

impl LocalDataStore {
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Balls file name.
    pub const BALLS_FILE: &str = "balls.json";
    /// Battle modifications file name.
    pub const MODIFICATIONS_FILE: &str = "modifications.json";
    /// Moves directory name.
    pub const MOVES_DIR: &str = "moves";
    /// Species directory name.
    pub const SPECIES_DIR: &str = "mons";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new(root: &str) -> Result<Self> {
        let root = Path::new(root);
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self::default();
        store.initialize(root)?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(&env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    fn initialize(&mut self, root: &Path) -> Result<()> {
        self.type_chart = serde_json::from_reader(
            File::open(root.join(Self::TYPE_CHART_FILE)).context("failed to read type chart")?,
        )
        .context("failed to parse type chart")?;

        self.balls = Self::read_table(root, Self::BALLS_FILE)?;
        self.modifications = Self::read_table(root, Self::MODIFICATIONS_FILE)?;
        self.moves = Self::read_all_files_in_directory(root, Self::MOVES_DIR)?;
        self.species = Self::read_all_files_in_directory(root, Self::SPECIES_DIR)?;

        Ok(())
    }

    fn read_table<T: DeserializeOwned>(root: &Path, file: &str) -> Result<HashMap<Id, T>> {
        let table: HashMap<String, T> = serde_json::from_reader(
            File::open(root.join(file)).context(format!("failed to read {file}"))?,
        )
        .context(format!("failed to parse {file}"))?;
        Ok(table
            .into_iter()
            .map(|(key, value)| (Id::from(key), value))
            .collect())
    }

    fn read_all_files_in_directory<T: DeserializeOwned>(
        root: &Path,
        dir: &str,
    ) -> Result<HashMap<Id, T>> {
        let tables = root
            .join(dir)
            .read_dir()
            .context(format!("failed to read {dir} directory"))?
            .filter_map(|entry| Some(entry.ok()?.path()))
            .filter(|path| path.is_file())
            .map(|path| {
                let path_name = path.to_string_lossy().to_string();
                serde_json::from_reader::<File, HashMap<String, T>>(
                    File::open(path).context(format!("{path_name} could not be opened"))?,
                )
                .context(format!("failed to read {dir} data from {path_name}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut map = HashMap::default();
        map.extend(
            tables
                .into_iter()
                .flat_map(|table| table.into_iter())
                .map(|(key, value)| (Id::from(key), value)),
        );
        Ok(map)
    }
}

impl DataStore for LocalDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_ball(&self, id: &Id) -> Result<Option<BallData>> {
        Ok(self.balls.get(id).cloned())
    }

    fn get_modification(&self, id: &Id) -> Result<Option<BattleModification>> {
        Ok(self.modifications.get(id).cloned())
    }
}
