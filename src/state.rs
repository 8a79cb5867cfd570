/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ここでは database_url のみ (pool は持たない。/db-health は接続を都度張る)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub database_url: Option<String>,
}

impl AppState {
    pub fn new(database_url: Option<String>) -> Self {
        Self { database_url }
    }
}
