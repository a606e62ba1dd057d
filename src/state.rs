/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: started_at (uptime 計測用) など
 * - Clone 前提で持つ (内部は Copy cheap)
 */
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
