use poise::CreateReply;

use crate::game::session;
use crate::{Context, Error};

async fn catch_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("this command can only be used in a server")?;

    let message = match session::open_in_guild(&ctx.data().sessions, &guild_id.to_string()).await {
        Some(open) => format!(
            "🦀 There's a crab in <#{}> right now! Press the catch button on its message.",
            open.channel_id
        ),
        None => "🦀 No crab is currently visible! Wait for one to appear.".to_string(),
    };

    ctx.send(CreateReply::default().content(message).ephemeral(true))
        .await?;
    Ok(())
}

/// Catch a crab when one appears
#[poise::command(slash_command, guild_only)]
pub async fn catch(ctx: Context<'_>) -> Result<(), Error> {
    catch_impl(ctx).await
}
