pub struct Config {
    pub discord_token: String,
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .expect("DISCORD_TOKEN environment variable is required"),
            data_dir: std::env::var("CRABBOT_DATA_DIR").unwrap_or_else(|_| ".".to_string()),
        }
    }
}
