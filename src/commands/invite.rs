use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::{Context, Error};

async fn invite_impl(ctx: Context<'_>) -> Result<(), Error> {
    let client_id = ctx.framework().bot_id;
    let invite_url = format!(
        "https://discord.com/oauth2/authorize?client_id={client_id}\
         &permissions=277025770560&scope=bot%20applications.commands"
    );

    let embed = CreateEmbed::new()
        .title("🔗 Invite Crab Bot")
        .description("Click the link below to add Crab Bot to your server!")
        .field(
            "Invite Link",
            format!("[Click here to invite]({invite_url})"),
            false,
        )
        .field(
            "Required Permissions",
            "• Read Messages\n• Send Messages\n• Embed Links\n• Use Slash Commands\n\
             • Read Message History\n• Add Reactions",
            true,
        )
        .footer(CreateEmbedFooter::new("Thank you for using Crab Bot! 🦀"))
        .color(0x7289DA);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Get the bot invite link
#[poise::command(slash_command)]
pub async fn invite(ctx: Context<'_>) -> Result<(), Error> {
    invite_impl(ctx).await
}
