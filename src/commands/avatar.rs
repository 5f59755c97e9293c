use poise::serenity_prelude as serenity;
use poise::CreateReply;
use serenity::builder::{CreateEmbed, EditProfile};

use crate::game::flavor;
use crate::utils::embed;
use crate::{Context, Error};

async fn avatar_impl(ctx: Context<'_>, image_url: Option<String>) -> Result<(), Error> {
    let url = image_url.unwrap_or_else(|| flavor::crab_image().to_string());

    ctx.defer().await?;

    let bytes = match fetch_image(&ctx.data().http_client, &url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("avatar download failed: {e}");
            ctx.send(CreateReply::default().embed(embed::error(
                "Couldn't fetch the image from the provided URL.",
            )))
            .await?;
            return Ok(());
        }
    };

    let attachment = serenity::CreateAttachment::bytes(bytes, "avatar.png");
    let mut current_user = ctx.serenity_context().cache.current_user().clone();
    if let Err(e) = current_user
        .edit(ctx.http(), EditProfile::new().avatar(&attachment))
        .await
    {
        ctx.send(
            CreateReply::default()
                .embed(embed::error(&format!("Failed to update avatar: {e}"))),
        )
        .await?;
        return Ok(());
    }

    let embed = CreateEmbed::new()
        .title("✅ Avatar Updated!")
        .description("Bot avatar has been successfully changed.")
        .thumbnail(url)
        .color(0x00FF00);
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

/// Change the bot's avatar (Admin only)
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "URL of the new avatar image"] image_url: Option<String>,
) -> Result<(), Error> {
    avatar_impl(ctx, image_url).await
}
