pub struct ApiSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub game_type_id: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.nhle.com/stats/rest/en",
            user_agent: "Mozilla/5.0",
            timeout_secs: 30,
            game_type_id: 2, // regular season
        }
    }
}

pub struct ReportSettings {
    pub defender_pool: usize,
    pub defender_limit: usize,
    pub forward_pool: usize,
    pub forward_limit: usize,
    pub goalie_pool: usize,
    pub goalie_min_games: i64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            defender_pool: 150,
            defender_limit: 50,
            forward_pool: 300,
            forward_limit: 100,
            // The output key says Top_50 but the snapshot has always kept 60.
            // Kept at 60 pending product sign-off.
            goalie_pool: 60,
            goalie_min_games: 10,
        }
    }
}

pub struct AppConfig {
    pub api: ApiSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            report: ReportSettings::default(),
        }
    }
}
