mod move_selector;

pub use move_selector::{
    GOOD_AI_MODIFICATION,
    MoveSelector,
    TURN_TWO_MODIFICATION,
};
