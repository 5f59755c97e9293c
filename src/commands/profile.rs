use poise::serenity_prelude as serenity;
use poise::CreateReply;

use crate::game::progression;
use crate::utils::embed;
use crate::{Context, Error};

async fn profile_impl(ctx: Context<'_>, member: Option<serenity::Member>) -> Result<(), Error> {
    let member = match member {
        Some(m) => m,
        None => ctx
            .author_member()
            .await
            .ok_or("could not resolve your server profile")?
            .into_owned(),
    };
    let user_id = member.user.id.to_string();

    let (record, rank) = {
        let mut store = ctx.data().store.write().await;
        let created = !store.users.contains_key(&user_id);
        let record = store.users.entry(user_id.clone()).or_default().clone();
        if created {
            if let Err(e) = store.save_users() {
                tracing::error!("failed to persist user records: {e}");
            }
        }
        let rank = progression::compute_rank(&store.users, &user_id);
        (record, rank)
    };

    ctx.send(
        CreateReply::default().embed(embed::profile(member.display_name(), &record, rank)),
    )
    .await?;
    Ok(())
}

/// Check your crab profile
#[poise::command(slash_command, guild_only)]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Member to look up (defaults to you)"] member: Option<serenity::Member>,
) -> Result<(), Error> {
    profile_impl(ctx, member).await
}
