use std::collections::HashMap;

use rand::Rng;

use crate::store::UserRecord;

pub const COIN_RANGE: (u64, u64) = (5, 15);
pub const XP_RANGE: (u64, u64) = (1, 3);

/// XP required to advance past the given level.
pub fn xp_needed(level: u32) -> u64 {
    level as u64 * 10
}

/// Rolls the reward for one successful catch: coins and xp, both inclusive
/// ranges.
pub fn roll_reward<R: Rng>(rng: &mut R) -> (u64, u64) {
    (
        rng.gen_range(COIN_RANGE.0..=COIN_RANGE.1),
        rng.gen_range(XP_RANGE.0..=XP_RANGE.1),
    )
}

/// Applies one catch to a user record and returns whether it leveled them up.
///
/// At most one level-up is applied per catch; xp above the threshold is
/// discarded on level-up, so `xp < level * 10` holds afterwards.
pub fn apply_catch(user: &mut UserRecord, coins_earned: u64, xp_earned: u64) -> bool {
    user.crab_coins += coins_earned;
    user.xp += xp_earned;
    user.crabs_caught += 1;

    if user.xp >= xp_needed(user.level) {
        user.level += 1;
        user.xp = 0;
        true
    } else {
        false
    }
}

/// 1-based leaderboard rank: descending by crabs caught, ties broken by
/// ascending user id.
pub fn compute_rank(users: &HashMap<String, UserRecord>, user_id: &str) -> Option<usize> {
    let mut entries: Vec<(&str, u64)> = users
        .iter()
        .map(|(id, user)| (id.as_str(), user.crabs_caught))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
        .iter()
        .position(|(id, _)| *id == user_id)
        .map(|pos| pos + 1)
}

/// Top `limit` users with at least one catch, ordered like [`compute_rank`].
pub fn top_catchers(users: &HashMap<String, UserRecord>, limit: usize) -> Vec<(String, UserRecord)> {
    let mut entries: Vec<(String, UserRecord)> = users
        .iter()
        .filter(|(_, user)| user.crabs_caught > 0)
        .map(|(id, user)| (id.clone(), user.clone()))
        .collect();
    entries.sort_by(|a, b| {
        b.1.crabs_caught
            .cmp(&a.1.crabs_caught)
            .then(a.0.cmp(&b.0))
    });
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_first_catch() {
        // New user catches with coins=10, xp=3 → {coins:10, xp:3, level:1, catches:1}
        let mut user = UserRecord::default();
        let leveled_up = apply_catch(&mut user, 10, 3);
        assert!(!leveled_up);
        assert_eq!(user.crab_coins, 10);
        assert_eq!(user.xp, 3);
        assert_eq!(user.level, 1);
        assert_eq!(user.crabs_caught, 1);
    }

    #[test]
    fn test_level_up_discards_excess_xp() {
        // Level 2 at 18 xp earns 3 → 21 ≥ 20 → level 3, xp reset to 0
        let mut user = UserRecord {
            level: 2,
            xp: 18,
            ..Default::default()
        };
        let leveled_up = apply_catch(&mut user, 5, 3);
        assert!(leveled_up);
        assert_eq!(user.level, 3);
        assert_eq!(user.xp, 0);
    }

    #[test]
    fn test_at_most_one_level_up_per_catch() {
        // Even a roll that crosses the whole threshold only grants one level.
        let mut user = UserRecord {
            level: 1,
            xp: 9,
            ..Default::default()
        };
        apply_catch(&mut user, 5, 3);
        assert_eq!(user.level, 2);
        assert_eq!(user.xp, 0);
    }

    #[test]
    fn test_xp_invariant_over_many_catches() {
        let mut user = UserRecord::default();
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let before_catches = user.crabs_caught;
            let before_coins = user.crab_coins;
            let (coins, xp) = roll_reward(&mut rng);
            apply_catch(&mut user, coins, xp);
            assert!(user.xp < xp_needed(user.level));
            assert_eq!(user.crabs_caught, before_catches + 1);
            assert!(user.crab_coins >= before_coins);
        }
    }

    #[test]
    fn test_roll_reward_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (coins, xp) = roll_reward(&mut rng);
            assert!((5..=15).contains(&coins));
            assert!((1..=3).contains(&xp));
        }
    }

    fn user_with_catches(n: u64) -> UserRecord {
        UserRecord {
            crabs_caught: n,
            ..Default::default()
        }
    }

    #[test]
    fn test_rank_descending_by_catches() {
        let mut users = HashMap::new();
        users.insert("100".to_string(), user_with_catches(3));
        users.insert("200".to_string(), user_with_catches(9));
        users.insert("300".to_string(), user_with_catches(1));

        assert_eq!(compute_rank(&users, "200"), Some(1));
        assert_eq!(compute_rank(&users, "100"), Some(2));
        assert_eq!(compute_rank(&users, "300"), Some(3));
        assert_eq!(compute_rank(&users, "999"), None);
    }

    #[test]
    fn test_rank_ties_broken_by_user_id() {
        let mut users = HashMap::new();
        users.insert("200".to_string(), user_with_catches(5));
        users.insert("100".to_string(), user_with_catches(5));

        assert_eq!(compute_rank(&users, "100"), Some(1));
        assert_eq!(compute_rank(&users, "200"), Some(2));
    }

    #[test]
    fn test_top_catchers_skips_zero_catch_users() {
        let mut users = HashMap::new();
        users.insert("100".to_string(), user_with_catches(0));
        users.insert("200".to_string(), user_with_catches(2));
        users.insert("300".to_string(), user_with_catches(8));

        let top = top_catchers(&users, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "300");
        assert_eq!(top[1].0, "200");
    }
}
