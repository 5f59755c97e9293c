use std::path::PathBuf;

use crab_bot::game::session::{self, ClaimError};
use crab_bot::game::{progression, shop, GameError};
use crab_bot::store::{GuildRecord, Store, UserRecord};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("crab-bot-flow-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn temp_store(tag: &str) -> Store {
    Store::load(temp_dir(tag)).unwrap()
}

#[tokio::test]
async fn test_spawn_claim_catch_persist_flow() {
    // Scheduler spawns, a user presses the catch button, the record mutates,
    // the store persists, and a restart sees the same record.
    let dir = temp_dir("catch");
    let mut store = Store::load(&dir).unwrap();
    let sessions = session::new_tracker();

    let session_id = session::open(&sessions, "guild-1", 42).await;
    assert!(session_id.starts_with("crab_guild-1_"));

    // First click wins
    session::claim(&sessions, &session_id).await.unwrap();

    let user = store.users.entry("7001".to_string()).or_default();
    let leveled_up = progression::apply_catch(user, 10, 3);
    assert!(!leveled_up);
    assert_eq!(
        *user,
        UserRecord {
            crabs_caught: 1,
            crab_coins: 10,
            inventory: vec![],
            level: 1,
            xp: 3,
        }
    );
    store.save_users().unwrap();

    // Second click is too late
    assert_eq!(
        session::claim(&sessions, &session_id).await,
        Err(ClaimError::AlreadyClaimed)
    );

    // Restart: the catch survived
    let reloaded = Store::load(&dir).unwrap();
    assert_eq!(reloaded.users["7001"].crabs_caught, 1);
    assert_eq!(reloaded.users["7001"].crab_coins, 10);
}

#[tokio::test]
async fn test_catch_until_level_up_then_shop_flow() {
    // User grinds catches to level up, then spends the coins at the shop.
    let mut store = temp_store("shop");
    let user = store.users.entry("7002".to_string()).or_default();

    // Four catches at 3 xp each: 3, 6, 9, then 12 ≥ 10 → level 2, xp 0
    for expected_level in [1, 1, 1, 2] {
        progression::apply_catch(user, 15, 3);
        assert_eq!(user.level, expected_level);
    }
    assert_eq!(user.xp, 0);
    assert_eq!(user.crab_coins, 60);
    assert_eq!(user.crabs_caught, 4);

    // /buy rare crab (50 coins) succeeds
    let item = shop::apply_purchase(user, "rare crab").unwrap();
    assert_eq!(item.name, "Rare Crab");
    assert_eq!(user.crab_coins, 10);
    assert_eq!(user.inventory, vec!["Rare Crab".to_string()]);

    // /buy crab house (100 coins) fails and changes nothing
    let before = user.clone();
    assert_eq!(
        shop::apply_purchase(user, "crab house"),
        Err(GameError::InsufficientFunds {
            price: 100,
            balance: 10
        })
    );
    assert_eq!(*user, before);
}

#[tokio::test]
async fn test_unconfigured_guild_never_spawns() {
    // A guild record without a channel (or disabled) yields no spawn target,
    // so the scheduler skips it on every tick.
    let disabled = GuildRecord {
        enabled: false,
        crab_channel: Some(42),
        ..Default::default()
    };
    assert_eq!(disabled.spawn_target(), None);

    let no_channel = GuildRecord {
        enabled: true,
        crab_channel: None,
        ..Default::default()
    };
    assert_eq!(no_channel.spawn_target(), None);

    let ready = GuildRecord {
        enabled: true,
        crab_channel: Some(42),
        ..Default::default()
    };
    assert_eq!(ready.spawn_target(), Some(42));
}

#[tokio::test]
async fn test_profile_rank_matches_catch_order() {
    // Three users with different catch counts rank deterministically.
    let mut store = temp_store("rank");
    for (id, catches) in [("1", 5u64), ("2", 12), ("3", 5)] {
        let user = store.users.entry(id.to_string()).or_default();
        for _ in 0..catches {
            progression::apply_catch(user, 5, 1);
        }
    }

    assert_eq!(progression::compute_rank(&store.users, "2"), Some(1));
    // Tie on 5 catches broken by ascending user id
    assert_eq!(progression::compute_rank(&store.users, "1"), Some(2));
    assert_eq!(progression::compute_rank(&store.users, "3"), Some(3));

    let top = progression::top_catchers(&store.users, 2);
    assert_eq!(top[0].0, "2");
    assert_eq!(top[1].0, "1");
}
