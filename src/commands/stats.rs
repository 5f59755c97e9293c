use std::time::Duration;

use poise::serenity_prelude as serenity;
use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::game::progression;
use crate::{Context, Error};

fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let (days, rem) = (total / 86400, total % 86400);
    let (hours, rem) = (rem / 3600, rem % 3600);
    let (minutes, seconds) = (rem / 60, rem % 60);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

async fn stats_impl(ctx: Context<'_>) -> Result<(), Error> {
    let (user_count, total_crabs, total_coins, top) = {
        let store = ctx.data().store.read().await;
        let total_crabs: u64 = store.users.values().map(|u| u.crabs_caught).sum();
        let total_coins: u64 = store.users.values().map(|u| u.crab_coins).sum();
        let top = progression::top_catchers(&store.users, 1).into_iter().next();
        (store.users.len(), total_crabs, total_coins, top)
    };

    let server_count = ctx.serenity_context().cache.guilds().len();
    let uptime = format_uptime(ctx.data().started_at.elapsed());
    let latency = ctx.ping().await.as_millis();

    let mut embed = CreateEmbed::new()
        .title("📊 Crab Bot Statistics")
        .field(
            "🌐 Server Stats",
            format!("**Servers:** {server_count}\n**Total Users:** {user_count}"),
            true,
        )
        .field(
            "🦀 Crab Stats",
            format!(
                "**Total Crabs Caught:** {total_crabs}\n**Total Crab Coins:** {total_coins}"
            ),
            true,
        )
        .field(
            "⚡ Performance",
            format!("**Uptime:** {uptime}\n**Latency:** {latency}ms"),
            true,
        )
        .color(0x4FC3F7);

    if let Some((user_id, record)) = top {
        let name = match user_id.parse::<u64>() {
            Ok(id) => serenity::UserId::new(id)
                .to_user(ctx.serenity_context())
                .await
                .map(|u| u.global_name.unwrap_or(u.name))
                .unwrap_or_else(|_| "Unknown User".to_string()),
            Err(_) => "Unknown User".to_string(),
        };
        embed = embed.field(
            "🏆 Top Catcher",
            format!("**{name}**\n{} crabs caught!", record.crabs_caught),
            false,
        );
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// View bot statistics
#[poise::command(slash_command)]
pub async fn stats(ctx: Context<'_>) -> Result<(), Error> {
    stats_impl(ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(42)), "0m 42s");
        assert_eq!(format_uptime(Duration::from_secs(3700)), "1h 1m 40s");
        assert_eq!(
            format_uptime(Duration::from_secs(90061)),
            "1d 1h 1m 1s"
        );
    }
}
