use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

/// Decides whether a Mon flees from a wild encounter.
///
/// `attempts` is the number of escape attempts already made in this encounter. Each one makes the
/// next attempt more likely to succeed.
pub fn attempt_escape(
    own_speed: u16,
    opponent_speed: u16,
    attempts: u32,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> bool {
    let b = (opponent_speed as u64 / 4) % 256;
    if b == 0 {
        log::debug!("escape succeeds against opponent speed {opponent_speed}");
        return true;
    }
    let odds = own_speed as u64 * 32 / b + 30 * attempts as u64;
    if odds > 255 {
        log::debug!("escape succeeds with odds {odds}");
        return true;
    }
    let roll = rand_util::range(prng, 0, 256);
    let escaped = roll < odds;
    log::debug!("escape roll {roll} against odds {odds}: {escaped}");
    escaped
}

#[cfg(test)]
mod escape_test {
    use monbattle_test_utils::{
        ControlledRandomNumberGenerator,
        test_data_store,
    };

    use crate::{
        DataStoreByName,
        battle::{
            BattleContext,
            attempt_escape,
        },
        mons::{
            Ivs,
            Mon,
        },
    };

    #[test]
    fn slow_opponent_never_prevents_escape() {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        for opponent_speed in 0..4 {
            assert!(attempt_escape(1, opponent_speed, 0, &mut prng));
        }
        // 1024 / 4 wraps around to 0.
        assert!(attempt_escape(1, 1024, 0, &mut prng));
        assert_eq!(prng.sequence_count(), 0);
    }

    #[test]
    fn compares_roll_against_odds() {
        // b = 25, odds = 640 / 25 = 25.
        let mut prng = ControlledRandomNumberGenerator::with_values([24]);
        assert!(attempt_escape(20, 100, 0, &mut prng));
        let mut prng = ControlledRandomNumberGenerator::with_values([25]);
        assert!(!attempt_escape(20, 100, 0, &mut prng));
    }

    #[test]
    fn previous_attempts_raise_odds() {
        // odds = 25 + 30 * 2 = 85.
        let mut prng = ControlledRandomNumberGenerator::with_values([84]);
        assert!(attempt_escape(20, 100, 2, &mut prng));
        let mut prng = ControlledRandomNumberGenerator::with_values([85]);
        assert!(!attempt_escape(20, 100, 2, &mut prng));
    }

    #[test]
    fn high_odds_succeed_without_drawing() {
        let mut prng = ControlledRandomNumberGenerator::new(Some(0));
        assert!(attempt_escape(20, 100, 8, &mut prng));
        assert!(attempt_escape(200, 100, 0, &mut prng));
        assert_eq!(prng.sequence_count(), 0);
    }

    #[test]
    fn context_counts_every_attempt() {
        let data = test_data_store().unwrap();
        let slow = Mon::new(
            data.get_species_by_name("Geodude").unwrap().unwrap(),
            10,
            Ivs::default(),
            Vec::new(),
        )
        .unwrap();
        let fast = Mon::new(
            data.get_species_by_name("Pikachu").unwrap().unwrap(),
            50,
            Ivs::default(),
            Vec::new(),
        )
        .unwrap();

        let mut context = BattleContext::wild();
        // Geodude speed 9 against Pikachu speed 95: b = 23, odds = 288 / 23 = 12.
        let mut prng = ControlledRandomNumberGenerator::with_values([255, 255, 0]);
        assert!(!context.attempt_escape(&slow, &fast, &mut prng));
        assert_eq!(context.escape_attempts, 1);
        assert!(!context.attempt_escape(&slow, &fast, &mut prng));
        assert_eq!(context.escape_attempts, 2);
        assert!(context.attempt_escape(&slow, &fast, &mut prng));
        assert_eq!(context.escape_attempts, 3);
    }
}
