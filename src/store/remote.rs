use chrono::Utc;
use serde_json::Value;
use sqlx::{Pool, Row, Sqlite};

use crate::model::UserRecord;

/// Document store: one JSON payload per user in the `records` table.
/// Writes are last-write-wins; `updated_at` is stored for observability and
/// never compared.
#[derive(Clone)]
pub struct RemoteStore {
    pool: Pool<Sqlite>,
}

impl RemoteStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Fetches a user's record. A stored payload that no longer parses is
    /// treated as absent, not as a fatal error.
    pub async fn load(&self, user_id: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        let row = sqlx::query("SELECT payload FROM records WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else { return Ok(None) };
        let payload: String = row.try_get("payload")?;

        match serde_json::from_str(&payload) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                log::warn!("record for {user_id} is unreadable, ignoring it: {err}");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, record: &UserRecord) -> Result<(), sqlx::Error> {
        let payload = serde_json::to_string(record)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO records (user_id, payload, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE
            SET payload = excluded.payload, updated_at = excluded.updated_at
            "#,
        )
        .bind(&record.user_id)
        .bind(payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Merge-update: deep-merges a JSON patch into the stored document.
    /// Missing documents start from an empty object, so a patch can create
    /// the record.
    pub async fn merge(&self, user_id: &str, patch: &Value) -> Result<(), sqlx::Error> {
        let row = sqlx::query("SELECT payload FROM records WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        let mut doc: Value = match row {
            Some(row) => {
                let payload: String = row.try_get("payload")?;
                serde_json::from_str(&payload).unwrap_or_else(|_| Value::Object(Default::default()))
            }
            None => Value::Object(Default::default()),
        };
        merge_value(&mut doc, patch);
        if let Value::Object(map) = &mut doc {
            map.insert("user_id".into(), Value::String(user_id.to_string()));
        }

        let payload = serde_json::to_string(&doc)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO records (user_id, payload, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE
            SET payload = excluded.payload, updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn raw(&self, user_id: &str) -> Result<Option<Value>, sqlx::Error> {
        let row = sqlx::query("SELECT payload FROM records WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => {
                let payload: String = row.try_get("payload")?;
                Ok(serde_json::from_str(&payload).ok())
            }
            None => Ok(None),
        }
    }
}

/// Objects merge key by key, everything else replaces.
fn merge_value(doc: &mut Value, patch: &Value) {
    match (doc, patch) {
        (Value::Object(doc), Value::Object(patch)) => {
            for (key, value) in patch {
                merge_value(doc.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (doc, patch) => *doc = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_replaces_scalars_and_arrays_but_merges_objects() {
        let mut doc = json!({
            "settings": {"theme": "light", "currency": "BRL"},
            "incomes": [{"id": "a"}],
        });
        merge_value(
            &mut doc,
            &json!({
                "settings": {"theme": "dark"},
                "incomes": [{"id": "b"}],
            }),
        );
        assert_eq!(doc["settings"]["theme"], "dark");
        assert_eq!(doc["settings"]["currency"], "BRL");
        assert_eq!(doc["incomes"], json!([{"id": "b"}]));
    }

    #[test]
    fn merge_creates_missing_keys() {
        let mut doc = json!({});
        merge_value(&mut doc, &json!({"goals": []}));
        assert_eq!(doc, json!({"goals": []}));
    }
}
