use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::{Context, Error};

async fn about_impl(ctx: Context<'_>) -> Result<(), Error> {
    let user_count = {
        let store = ctx.data().store.read().await;
        store.users.len()
    };
    let server_count = ctx.serenity_context().cache.guilds().len();

    let embed = CreateEmbed::new()
        .title("🦀 About Crab Bot")
        .field(
            "📖 Description",
            "A fun Discord bot where crabs randomly appear and users can catch them to earn \
             coins, level up, and buy items from the shop!",
            false,
        )
        .field(
            "📊 Statistics",
            format!("**Servers:** {server_count}\n**Users:** {user_count}"),
            true,
        )
        .field(
            "🔧 Technical",
            format!("**Version:** {}", env!("CARGO_PKG_VERSION")),
            true,
        )
        .field(
            "🎨 Inspiration",
            "Inspired by [cat-bot](https://github.com/milenakos/cat-bot)",
            false,
        )
        .footer(CreateEmbedFooter::new("Made with ❤️ and 🦀"))
        .color(0x7289DA);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Learn about Crab Bot
#[poise::command(slash_command)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    about_impl(ctx).await
}
