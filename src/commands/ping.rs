use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::{Context, Error};

async fn ping_impl(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await.as_millis();

    let (color, verdict) = if latency < 100 {
        (0x00FF00, "🌟 Excellent connection!")
    } else if latency < 200 {
        (0xFFFF00, "✅ Good connection!")
    } else {
        (0xFF0000, "⚠️ Connection may be slow!")
    };

    let embed = CreateEmbed::new()
        .title("🏓 Pong!")
        .field("📡 Gateway Latency", format!("`{latency}ms`"), true)
        .footer(CreateEmbedFooter::new(verdict))
        .color(color);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Check the bot's latency
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    ping_impl(ctx).await
}
