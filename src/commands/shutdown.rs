use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::{Context, Error};

async fn shutdown_impl(ctx: Context<'_>) -> Result<(), Error> {
    // Final flush of both record files before dropping the gateway.
    {
        let store = ctx.data().store.read().await;
        if let Err(e) = store.save_users() {
            tracing::error!("final user record flush failed: {e}");
        }
        if let Err(e) = store.save_guilds() {
            tracing::error!("final guild record flush failed: {e}");
        }
    }

    let embed = CreateEmbed::new()
        .title("🦀 Shutting Down...")
        .description("Crab bot is going offline. Goodbye! 👋")
        .color(0xFF6B6B);
    ctx.send(CreateReply::default().embed(embed)).await?;

    tracing::info!("shutdown command received, closing shards");
    ctx.framework().shard_manager().shutdown_all().await;
    Ok(())
}

/// Shutdown the bot (Owner only)
#[poise::command(slash_command, owners_only)]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), Error> {
    shutdown_impl(ctx).await
}
