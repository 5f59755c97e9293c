pub mod commands;
pub mod config;
pub mod events;
pub mod game;
pub mod scheduler;
pub mod store;
pub mod utils;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub store: store::SharedStore,
    pub sessions: game::session::SessionTracker,
    pub http_client: reqwest::Client,
    pub started_at: std::time::Instant,
}
