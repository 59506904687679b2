mod data_store;
mod local;

pub use data_store::{
    DataStore,
    DataStoreByName,
};
pub use local::LocalDataStore;
