mod ball_data;

pub use ball_data::{
    BallData,
    BallType,
};
