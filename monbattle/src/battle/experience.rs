use crate::{
    battle::BattleContext,
    mons::Mon,
};

/// Experience awarded to `winner` for defeating `defeated`.
///
/// Trainer battles and traded winners each multiply the award by 1.5. Experience is not split
/// between participants.
pub fn experience_gained(context: &BattleContext, winner: &Mon, defeated: &Mon) -> u32 {
    // Each 1.5 multiplier is kept as 3/2 so the intermediate floor stays exact.
    let trainer = if context.is_trainer_battle() { 3 } else { 2 };
    let traded = if winner.traded { 3 } else { 2 };
    let base = defeated.species.base_exp_yield as u64 * defeated.level as u64;
    let boosted = base * trainer * traded / 4;
    let experience = (boosted / 7) as u32;
    log::debug!(
        "{} gained {experience} experience from {}",
        winner.nickname,
        defeated.nickname
    );
    experience
}

#[cfg(test)]
mod experience_test {
    use monbattle_test_utils::test_data_store;

    use crate::{
        DataStoreByName,
        battle::{
            BattleContext,
            Trainer,
            experience_gained,
        },
        mons::{
            Ivs,
            Mon,
        },
    };

    fn mon(species: &str, level: u8) -> Mon {
        let data = test_data_store().unwrap();
        Mon::new(
            data.get_species_by_name(species).unwrap().unwrap(),
            level,
            Ivs::default(),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn awards_wild_experience() {
        let winner = mon("Pikachu", 10);
        // floor(86 * 12 / 7)
        assert_eq!(
            experience_gained(&BattleContext::wild(), &winner, &mon("Geodude", 12)),
            147
        );
    }

    #[test]
    fn boosts_trainer_battles() {
        let winner = mon("Pikachu", 10);
        // floor(floor(1.5 * 86 * 12) / 7)
        assert_eq!(
            experience_gained(
                &BattleContext::trainer(Trainer::new("Youngster")),
                &winner,
                &mon("Geodude", 12)
            ),
            221
        );
    }

    #[test]
    fn boosts_traded_winners() {
        let mut winner = mon("Pikachu", 10);
        winner.traded = true;
        let defeated = mon("Rattata", 5);
        // floor(floor(1.5 * 57 * 5) / 7)
        assert_eq!(
            experience_gained(&BattleContext::wild(), &winner, &defeated),
            61
        );
        // floor(floor(2.25 * 57 * 5) / 7)
        assert_eq!(
            experience_gained(
                &BattleContext::trainer(Trainer::new("Youngster")),
                &winner,
                &defeated
            ),
            91
        );
    }
}
