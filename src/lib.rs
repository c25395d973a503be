use sqlx::mysql::MySqlPool;

pub mod apis;
pub mod config;
pub mod db;
pub mod logging;
pub mod types;

#[derive(Debug)]
pub struct State {
    db_pool: MySqlPool,
}

impl State {
    pub fn new(db_pool: MySqlPool) -> Self {
        Self { db_pool }
    }
}
