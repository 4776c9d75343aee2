use std::path::Path;

use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{
        SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
    },
};

pub(super) struct DbState {
    pool: SqlitePool,
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState").finish()
    }
}

impl DbState {
    pub(super) async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(db_file.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub(super) async fn conn(&self) -> anyhow::Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }
}
