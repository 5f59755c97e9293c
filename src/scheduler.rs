use std::time::Duration;

use poise::serenity_prelude as serenity;
use serenity::builder::{CreateMessage, EditMessage};
use serenity::model::id::ChannelId;

use crate::game::session::{self, SessionTracker, SESSION_TIMEOUT};
use crate::store::SharedStore;
use crate::utils::{components, embed};
use crate::Error;

pub const SPAWN_PERIOD: Duration = Duration::from_secs(10 * 60);
pub const SPAWN_CHANCE: f64 = 0.7;

/// Fixed-period spawn loop. Spawned from the framework setup closure, which
/// only runs once the gateway reports ready, so the first tick can't race the
/// connection.
pub async fn run(ctx: serenity::Context, store: SharedStore, sessions: SessionTracker) {
    let mut interval = tokio::time::interval(SPAWN_PERIOD);
    loop {
        interval.tick().await;
        tick(&ctx, &store, &sessions).await;
    }
}

/// One pass over every configured guild. A failed send is logged and skipped
/// so the rest of the batch still gets its roll.
async fn tick(ctx: &serenity::Context, store: &SharedStore, sessions: &SessionTracker) {
    let targets: Vec<(String, u64)> = {
        let store = store.read().await;
        store
            .guilds
            .iter()
            .filter_map(|(guild_id, guild)| {
                guild.spawn_target().map(|channel| (guild_id.clone(), channel))
            })
            .collect()
    };

    for (guild_id, channel_id) in targets {
        if rand::random::<f64>() >= SPAWN_CHANCE {
            continue;
        }
        if let Err(e) = spawn_crab(ctx, sessions, &guild_id, channel_id).await {
            tracing::warn!("failed to spawn crab in guild {guild_id}: {e}");
        }
    }
}

/// Opens a catch session, posts the spawn message, and arms the expiry task
/// that marks the message as missed if nobody claims in time.
async fn spawn_crab(
    ctx: &serenity::Context,
    sessions: &SessionTracker,
    guild_id: &str,
    channel_id: u64,
) -> Result<(), Error> {
    let session_id = session::open(sessions, guild_id, channel_id).await;

    let message = CreateMessage::new()
        .embed(embed::crab_spawn())
        .components(components::catch_button(&session_id));
    let mut posted = ChannelId::new(channel_id)
        .send_message(&ctx.http, message)
        .await?;

    tracing::info!("crab spawned in guild {guild_id} (session {session_id})");

    let ctx = ctx.clone();
    let sessions = sessions.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SESSION_TIMEOUT).await;
        if session::expire(&sessions, &session_id).await {
            let edit = EditMessage::new()
                .embed(embed::crab_expired())
                .components(components::catch_button_expired(&session_id));
            if let Err(e) = posted.edit(&ctx.http, edit).await {
                tracing::warn!("failed to mark session {session_id} as expired: {e}");
            }
        }
    });

    Ok(())
}
