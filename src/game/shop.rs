use crate::store::UserRecord;

use super::GameError;

#[derive(Debug, PartialEq)]
pub struct ShopItem {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub price: u64,
}

pub const SHOP_ITEMS: &[ShopItem] = &[
    ShopItem {
        name: "Rare Crab",
        emoji: "🦀",
        description: "A special rare crab for your collection",
        price: 50,
    },
    ShopItem {
        name: "Crab House",
        emoji: "🏠",
        description: "A cozy home for your crabs",
        price: 100,
    },
    ShopItem {
        name: "Golden Net",
        emoji: "🎣",
        description: "Increases catch chance",
        price: 200,
    },
    ShopItem {
        name: "Crab Crown",
        emoji: "👑",
        description: "Become the crab king/queen",
        price: 500,
    },
    ShopItem {
        name: "Crystal Crab",
        emoji: "💎",
        description: "Legendary shiny crab",
        price: 1000,
    },
];

/// Case-insensitive lookup against the fixed price table.
pub fn find_item(name: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
}

/// Deducts the price and appends the item's display name to the inventory.
/// Failure leaves the record untouched; coins never go negative.
pub fn apply_purchase(
    user: &mut UserRecord,
    item_name: &str,
) -> Result<&'static ShopItem, GameError> {
    let item = find_item(item_name).ok_or(GameError::UnknownItem)?;
    if user.crab_coins < item.price {
        return Err(GameError::InsufficientFunds {
            price: item.price,
            balance: user.crab_coins,
        });
    }
    user.crab_coins -= item.price;
    user.inventory.push(item.name.to_string());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_item_case_insensitive() {
        assert_eq!(find_item("rare crab").map(|i| i.price), Some(50));
        assert_eq!(find_item("CRYSTAL CRAB").map(|i| i.price), Some(1000));
        assert_eq!(find_item("  Golden Net ").map(|i| i.price), Some(200));
        assert!(find_item("kraken").is_none());
    }

    #[test]
    fn test_purchase_deducts_and_appends() {
        let mut user = UserRecord {
            crab_coins: 120,
            ..Default::default()
        };
        let item = apply_purchase(&mut user, "crab house").unwrap();
        assert_eq!(item.name, "Crab House");
        assert_eq!(user.crab_coins, 20);
        assert_eq!(user.inventory, vec!["Crab House".to_string()]);
    }

    #[test]
    fn test_insufficient_funds_leaves_record_unchanged() {
        // 40 coins against a 50-coin item → error, nothing mutated.
        let mut user = UserRecord {
            crab_coins: 40,
            ..Default::default()
        };
        let before = user.clone();
        let err = apply_purchase(&mut user, "rare crab").unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                price: 50,
                balance: 40
            }
        );
        assert_eq!(user, before);
    }

    #[test]
    fn test_unknown_item_leaves_record_unchanged() {
        let mut user = UserRecord {
            crab_coins: 5000,
            ..Default::default()
        };
        let before = user.clone();
        assert_eq!(
            apply_purchase(&mut user, "diamond lobster"),
            Err(GameError::UnknownItem)
        );
        assert_eq!(user, before);
    }

    #[test]
    fn test_duplicates_track_quantity() {
        let mut user = UserRecord {
            crab_coins: 150,
            ..Default::default()
        };
        apply_purchase(&mut user, "rare crab").unwrap();
        apply_purchase(&mut user, "Rare Crab").unwrap();
        assert_eq!(user.crab_coins, 50);
        assert_eq!(
            user.inventory,
            vec!["Rare Crab".to_string(), "Rare Crab".to_string()]
        );
    }
}
