use poise::CreateReply;
use serenity::builder::CreateEmbed;

use crate::{Context, Error};

async fn inventory_impl(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();

    let inventory = {
        let store = ctx.data().store.read().await;
        store
            .users
            .get(&user_id)
            .map(|user| user.inventory.clone())
            .unwrap_or_default()
    };

    if inventory.is_empty() {
        ctx.send(
            CreateReply::default()
                .content(
                    "🦀 Your inventory is empty! Catch some crabs and buy items from the shop.",
                )
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    // Multiplicity = quantity owned, counted in first-seen order.
    let mut counts: Vec<(String, u64)> = Vec::new();
    for item in &inventory {
        match counts.iter_mut().find(|(name, _)| name == item) {
            Some((_, count)) => *count += 1,
            None => counts.push((item.clone(), 1)),
        }
    }

    let mut embed = CreateEmbed::new().title("🎒 Your Inventory").color(0x964B00);
    for (name, count) in counts {
        embed = embed.field(name, format!("Quantity: {count}"), true);
    }

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Check your inventory
#[poise::command(slash_command)]
pub async fn inventory(ctx: Context<'_>) -> Result<(), Error> {
    inventory_impl(ctx).await
}
