/// Connection settings for the remote table store.
///
/// Defaults are baked in at compile time; a local PostgREST-compatible
/// stack (e.g. `supabase start`) works out of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            base_url: option_env!("SQUAD_BOARD_STORE_URL")
                .unwrap_or("http://localhost:54321")
                .to_string(),
            api_key: option_env!("SQUAD_BOARD_STORE_KEY")
                .unwrap_or("public-anon-key")
                .to_string(),
            table: "players".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
