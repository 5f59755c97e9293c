use poise::CreateReply;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::game::shop;
use crate::game::GameError;
use crate::{Context, Error};

enum Outcome {
    NoRecord,
    Failed(GameError),
    Bought { name: &'static str, price: u64, remaining: u64 },
}

async fn buy_impl(ctx: Context<'_>, item: String) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();

    let outcome = {
        let mut store = ctx.data().store.write().await;
        if !store.users.contains_key(&user_id) {
            Outcome::NoRecord
        } else {
            let result = {
                let user = store
                    .users
                    .get_mut(&user_id)
                    .ok_or("user record disappeared mid-purchase")?;
                shop::apply_purchase(user, &item).map(|bought| (bought, user.crab_coins))
            };
            match result {
                Ok((bought, remaining)) => {
                    if let Err(e) = store.save_users() {
                        tracing::error!("failed to persist user records after purchase: {e}");
                    }
                    Outcome::Bought {
                        name: bought.name,
                        price: bought.price,
                        remaining,
                    }
                }
                Err(e) => Outcome::Failed(e),
            }
        }
    };

    match outcome {
        Outcome::NoRecord => {
            ctx.send(
                CreateReply::default()
                    .content("🦀 You haven't caught any crabs yet!")
                    .ephemeral(true),
            )
            .await?;
        }
        Outcome::Failed(e) => {
            ctx.send(
                CreateReply::default()
                    .content(format!("🦀 {e}"))
                    .ephemeral(true),
            )
            .await?;
        }
        Outcome::Bought {
            name,
            price,
            remaining,
        } => {
            let embed = CreateEmbed::new()
                .title("🦀 Purchase Successful!")
                .description(format!("You bought **{name}** for {price} Crab Coins!"))
                .footer(CreateEmbedFooter::new(format!(
                    "You have {remaining} Crab Coins remaining"
                )))
                .color(0x00FF00);
            ctx.send(CreateReply::default().embed(embed)).await?;
        }
    }
    Ok(())
}

/// Buy an item from the shop
#[poise::command(slash_command)]
pub async fn buy(
    ctx: Context<'_>,
    #[description = "The item you want to buy"] item: String,
) -> Result<(), Error> {
    buy_impl(ctx, item).await
}
