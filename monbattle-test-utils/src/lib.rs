mod data_store;
mod error_assert;
mod rng;

pub use data_store::{
    TestDataStore,
    test_data_store,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use rng::ControlledRandomNumberGenerator;
