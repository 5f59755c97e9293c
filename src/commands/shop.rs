use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::game::shop::SHOP_ITEMS;
use crate::{Context, Error};

async fn shop_impl(ctx: Context<'_>) -> Result<(), Error> {
    let mut embed = CreateEmbed::new()
        .title("🦀 Crab Shop")
        .description("Spend your Crab Coins here!")
        .color(0xFFD700);

    for item in SHOP_ITEMS {
        embed = embed.field(
            format!("{} {}", item.emoji, item.name),
            format!("{} - {} coins", item.description, item.price),
            false,
        );
    }

    embed = embed.footer(CreateEmbedFooter::new("Use /buy [item] to purchase items"));
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Buy crab items with your crab coins
#[poise::command(slash_command)]
pub async fn shop(ctx: Context<'_>) -> Result<(), Error> {
    shop_impl(ctx).await
}
