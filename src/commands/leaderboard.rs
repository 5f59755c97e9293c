use poise::serenity_prelude as serenity;
use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::game::progression;
use crate::{Context, Error};

async fn display_name(ctx: &Context<'_>, user_id: &str) -> String {
    let Ok(id) = user_id.parse::<u64>() else {
        return format!("User {user_id}");
    };
    match serenity::UserId::new(id).to_user(ctx.serenity_context()).await {
        Ok(user) => user.global_name.unwrap_or(user.name),
        Err(_) => format!("User {user_id}"),
    }
}

async fn leaderboard_impl(ctx: Context<'_>) -> Result<(), Error> {
    let top = {
        let store = ctx.data().store.read().await;
        progression::top_catchers(&store.users, 10)
    };

    let mut embed = CreateEmbed::new().title("🏆 Crab Leaderboard").color(0xFFD700);

    if top.is_empty() {
        embed = embed.description("No crabs caught yet! Be the first to catch one!");
    } else {
        for (i, (user_id, record)) in top.iter().enumerate() {
            let name = display_name(&ctx, user_id).await;
            let medal = match i {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("{}.", i + 1),
            };
            embed = embed.field(
                format!("{medal} {name}"),
                format!("🦀 {} crabs | ⭐ Lvl {}", record.crabs_caught, record.level),
                false,
            );
        }
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Check the crab catching leaderboard
#[poise::command(slash_command)]
pub async fn leaderboard(ctx: Context<'_>) -> Result<(), Error> {
    leaderboard_impl(ctx).await
}
