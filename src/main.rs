use crab_bot::{commands, config, events, game, scheduler, store, Data};
use poise::serenity_prelude as serenity;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    let record_store = match store::Store::load(&config.data_dir) {
        Ok(s) => {
            tracing::info!(
                "record store loaded: {} users, {} guilds",
                s.users.len(),
                s.guilds.len()
            );
            s
        }
        Err(e) => {
            tracing::error!("failed to load record store: {e}");
            return;
        }
    };

    let shared_store = store::new_shared(record_store);
    let sessions = game::session::new_tracker();

    let intents = serenity::GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                ctx.set_activity(Some(serenity::ActivityData::watching("for crabs")));
                tracing::info!("🦀 {} is ready!", ready.user.name);

                // The setup closure only runs after the gateway is ready, so
                // the spawn loop can't tick before the connection is up.
                tokio::spawn(scheduler::run(
                    ctx.clone(),
                    shared_store.clone(),
                    sessions.clone(),
                ));

                Ok(Data {
                    store: shared_store,
                    sessions,
                    http_client: reqwest::Client::new(),
                    started_at: std::time::Instant::now(),
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .expect("failed to create client");

    if let Err(e) = client.start().await {
        tracing::error!("client error: {e}");
    }
}
