use crate::{
    Type,
    TypeChart,
};

/// Multiplies the type chart entries for a move type against each of the defender's types.
///
/// The result is one of 0, 0.25, 0.5, 1, 2 or 4.
pub fn type_effectiveness(type_chart: &TypeChart, move_type: Type, defender_types: &[Type]) -> f64 {
    defender_types
        .iter()
        .map(|defending| {
            type_chart
                .effectiveness(move_type, *defending)
                .multiplier()
        })
        .product()
}
