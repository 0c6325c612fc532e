use super::state::GameState;

impl GameState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<GameState> {
        serde_json::from_str(json)
    }
}
