use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::{Context, Error};

async fn help_impl(ctx: Context<'_>) -> Result<(), Error> {
    let core_cmds = "\
`/setup` — Set up crab bot in your server
`/catch` — Catch a crab when one appears
`/profile` — Check your crab profile
`/shop` — Browse the crab shop
`/buy` — Purchase items
`/inventory` — Check your inventory
`/leaderboard` — View leaderboard";

    let info_cmds = "\
`/ping` — Check bot latency
`/about` — Learn about the bot
`/stats` — View statistics
`/invite` — Get invite link
`/help` — This help message";

    let admin_cmds = "\
`/avatar` — Change bot avatar (Admin)
`/shutdown` — Shutdown bot (Owner)";

    let embed = CreateEmbed::new()
        .title("🦀 Crab Bot Help")
        .description("Here are all the available commands:")
        .field("🎮 Core Commands", core_cmds, false)
        .field("ℹ️ Info Commands", info_cmds, true)
        .field("⚡ Admin Commands", admin_cmds, true)
        .footer(CreateEmbedFooter::new(
            "Use slash commands (/) to interact with the bot!",
        ))
        .color(0x7289DA);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show all available commands
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    help_impl(ctx).await
}
