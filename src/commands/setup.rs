use poise::serenity_prelude as serenity;
use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::store::DEFAULT_FREQUENCY_MINUTES;
use crate::utils::embed;
use crate::{Context, Error};

async fn setup_impl(ctx: Context<'_>, channel: serenity::GuildChannel) -> Result<(), Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("this command can only be used in a server")?;

    let save_result = {
        let mut store = ctx.data().store.write().await;
        let record = store.guilds.entry(guild_id.to_string()).or_default();
        record.enabled = true;
        record.crab_channel = Some(channel.id.get());
        record.crab_frequency = DEFAULT_FREQUENCY_MINUTES;
        store.save_guilds()
    };

    if let Err(e) = save_result {
        tracing::error!("failed to persist guild records: {e}");
        ctx.send(CreateReply::default().embed(embed::error(
            "Setup is active for this session but could not be written to disk.",
        )))
        .await?;
        return Ok(());
    }

    let embed = CreateEmbed::new()
        .title("🦀 Crab Bot Setup Complete!")
        .description(format!("Crab appearances enabled in <#{}>", channel.id))
        .field("Crab Frequency", "Every 10 minutes", true)
        .field("Commands", "Use `/help` to see all commands", true)
        .footer(CreateEmbedFooter::new("Crabs will start appearing soon!"))
        .color(0x00FF00);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Set up crab bot in your server
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
pub async fn setup(
    ctx: Context<'_>,
    #[description = "Channel where crabs will appear"] channel: serenity::GuildChannel,
) -> Result<(), Error> {
    setup_impl(ctx, channel).await
}
