use monbattle::{
    BattleEngine,
    config::EngineOptions,
};
use monbattle_test_utils::{
    TestDataStore,
    test_data_store,
};

pub fn data() -> TestDataStore {
    test_data_store().unwrap()
}

pub fn engine(data: &TestDataStore) -> BattleEngine<'_> {
    BattleEngine::new(data, EngineOptions::from_file(options_path()).unwrap()).unwrap()
}

pub fn options_path() -> String {
    format!("{}/../data/engine-options.json", env!("CARGO_MANIFEST_DIR"))
}
