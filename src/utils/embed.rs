use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::game::flavor;
use crate::game::progression;
use crate::store::UserRecord;

pub fn crab_spawn() -> CreateEmbed {
    CreateEmbed::new()
        .title("🦀 A Crab Appeared!")
        .description(flavor::appearance_message())
        .image(flavor::crab_image())
        .footer(CreateEmbedFooter::new("Click the button below to catch it!"))
        .color(0xFF6B6B)
}

pub fn crab_caught(
    catcher_name: &str,
    coins_earned: u64,
    xp_earned: u64,
    leveled_up: bool,
    user: &UserRecord,
) -> CreateEmbed {
    let level_up_msg = if leveled_up {
        format!(" 🎉 **Level up!** You're now level {}!", user.level)
    } else {
        String::new()
    };

    CreateEmbed::new()
        .title("🦀 Crab Caught!")
        .description(format!("**{catcher_name}** caught the crab!"))
        .field("🪙 Crab Coins", format!("+{coins_earned}"), true)
        .field("⭐ XP", format!("+{xp_earned}"), true)
        .field("📊 Total Crabs", user.crabs_caught.to_string(), true)
        .footer(CreateEmbedFooter::new(format!(
            "You now have {} Crab Coins{level_up_msg}",
            user.crab_coins
        )))
        .color(0x00FF00)
}

pub fn crab_expired() -> CreateEmbed {
    CreateEmbed::new()
        .title("🦀 The Crab Got Away...")
        .description("Nobody caught it in time. It scuttled back into the sea.")
        .footer(CreateEmbedFooter::new(format!(
            "Did you know? {}",
            flavor::crab_fact()
        )))
        .color(0x95A5A6)
}

pub fn profile(member_name: &str, user: &UserRecord, rank: Option<usize>) -> CreateEmbed {
    let rank_display = match rank {
        Some(rank) => format!("#{rank}"),
        None => "—".to_string(),
    };

    CreateEmbed::new()
        .title(format!("🦀 {member_name}'s Crab Profile"))
        .field("📊 Level", user.level.to_string(), true)
        .field(
            "⭐ XP",
            format!("{}/{}", user.xp, progression::xp_needed(user.level)),
            true,
        )
        .field("🦀 Crabs Caught", user.crabs_caught.to_string(), true)
        .field("🪙 Crab Coins", user.crab_coins.to_string(), true)
        .field("🎒 Inventory", format!("{} items", user.inventory.len()), true)
        .field("👑 Rank", rank_display, true)
        .color(0x4FC3F7)
}

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("❌ Error")
        .description(message)
        .color(0xED4245)
}
