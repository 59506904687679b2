use anyhow::Result;

use crate::error::invalid_input_error;

/// Width in pixels of the filled part of a health bar.
pub fn health_bar_width(full_width: u32, hp: u16, max_hp: u16) -> Result<u32> {
    if max_hp == 0 {
        return Err(invalid_input_error("max HP cannot be 0"));
    }
    let width = full_width.saturating_sub(1) as u64 * hp as u64 / max_hp as u64;
    u32::try_from(width)
        .map_err(|_| invalid_input_error(format!("health bar width {width} is out of range")))
}

#[cfg(test)]
mod health_bar_test {
    use crate::{
        battle::health_bar_width,
        error::is_invalid_input,
    };

    #[test]
    fn scales_linearly() {
        assert_eq!(health_bar_width(49, 100, 100).unwrap(), 48);
        assert_eq!(health_bar_width(49, 50, 100).unwrap(), 24);
        assert_eq!(health_bar_width(49, 1, 100).unwrap(), 0);
        assert_eq!(health_bar_width(49, 0, 100).unwrap(), 0);
    }

    #[test]
    fn scales_wide_bars_without_overflow() {
        assert_eq!(health_bar_width(100_000, 60_000, 60_000).unwrap(), 99_999);
        assert_eq!(health_bar_width(u32::MAX, 30_000, 60_000).unwrap(), u32::MAX / 2);
    }

    #[test]
    fn rejects_width_beyond_range() {
        assert!(is_invalid_input(&health_bar_width(u32::MAX, u16::MAX, 1).err().unwrap()));
    }

    #[test]
    fn rejects_zero_max_hp() {
        assert!(is_invalid_input(&health_bar_width(49, 0, 0).err().unwrap()));
    }
}
