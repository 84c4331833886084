use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Diary entries table
        CREATE TABLE IF NOT EXISTS entries (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            entry_date TEXT NOT NULL,
            entry_text TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_id ON entries(user_id);
        CREATE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, entry_date);

        -- Extracted health metrics, at most one row per entry
        CREATE TABLE IF NOT EXISTS health_metrics (
            id TEXT PRIMARY KEY,
            entry_id TEXT NOT NULL UNIQUE,
            mood_score REAL,
            energy_level REAL,
            pain_level REAL,
            sleep_quality REAL,
            sleep_hours REAL,
            stress_level REAL,
            ai_confidence REAL,
            created_at TEXT NOT NULL,
            FOREIGN KEY (entry_id) REFERENCES entries(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_health_metrics_entry_id ON health_metrics(entry_id);
        "#,
    )
    .await?;

    Ok(())
}
