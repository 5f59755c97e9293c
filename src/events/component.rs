use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::ComponentInteraction;

use crate::game::{progression, session};
use crate::utils::components::{self, CATCH_BUTTON_PREFIX};
use crate::utils::embed;
use crate::{Data, Error};

async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    message: &str,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(message)
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn update_message(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

/// Catch-button handler. The session claim is the only step that has to be
/// race-free; record mutation and persistence happen once, for the winner.
pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let Some(session_id) = interaction.data.custom_id.strip_prefix(CATCH_BUTTON_PREFIX) else {
        return Ok(());
    };

    if let Err(e) = session::claim(&data.sessions, session_id).await {
        respond_ephemeral(ctx, interaction, &format!("🦀 {e}")).await?;
        return Ok(());
    }

    let user_id = interaction.user.id.to_string();
    let (coins_earned, xp_earned, leveled_up, record) = {
        let mut store = data.store.write().await;
        let user = store.users.entry(user_id.clone()).or_default();
        let (coins_earned, xp_earned) = progression::roll_reward(&mut rand::thread_rng());
        let leveled_up = progression::apply_catch(user, coins_earned, xp_earned);
        let record = user.clone();

        // Best effort: a failed save keeps the in-memory update and is
        // retried implicitly on the next mutation.
        if let Err(e) = store.save_users() {
            tracing::error!("failed to persist user records after catch: {e}");
        }
        (coins_earned, xp_earned, leveled_up, record)
    };

    tracing::info!(
        "user {user_id} caught session {session_id} (+{coins_earned} coins, +{xp_earned} xp)"
    );

    let catcher_name = interaction
        .member
        .as_ref()
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| interaction.user.name.clone());

    update_message(
        ctx,
        interaction,
        embed::crab_caught(&catcher_name, coins_earned, xp_earned, leveled_up, &record),
        components::catch_button_caught(session_id),
    )
    .await?;

    Ok(())
}
