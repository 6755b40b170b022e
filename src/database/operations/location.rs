// 位置存储库
// 包含位置相关的数据库操作

use chrono::Utc;
use sqlx::{Error as SqlxError, SqlitePool};

use crate::database::models::location::LocationEntity;

const LOCATION_COLUMNS: &str = "id, name, latitude, longitude, created_at, updated_at";

/// 部分更新，None 表示保留原值
#[derive(Debug, Default, Clone)]
pub struct LocationChanges {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// 位置存储库，处理所有与位置相关的数据库操作
#[derive(Clone)]
pub struct LocationOperation {
    db: SqlitePool,
}

impl LocationOperation {
    /// 创建新的位置存储库实例
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// 创建位置
    pub async fn create(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationEntity, SqlxError> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO locations (name, latitude, longitude, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING {}
            "#,
            LOCATION_COLUMNS
        );

        sqlx::query_as::<_, LocationEntity>(&sql)
            .bind(name)
            .bind(latitude)
            .bind(longitude)
            .bind(now)
            .fetch_one(&self.db)
            .await
    }

    /// 查询全部位置
    pub async fn find_all(&self) -> Result<Vec<LocationEntity>, SqlxError> {
        let sql = format!("SELECT {} FROM locations ORDER BY id", LOCATION_COLUMNS);
        sqlx::query_as::<_, LocationEntity>(&sql)
            .fetch_all(&self.db)
            .await
    }

    /// 根据ID查找位置
    pub async fn find_by_id(&self, id: i64) -> Result<Option<LocationEntity>, SqlxError> {
        let sql = format!("SELECT {} FROM locations WHERE id = ?1", LOCATION_COLUMNS);
        sqlx::query_as::<_, LocationEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    /// 更新位置，返回更新后的记录；记录不存在时返回 None
    pub async fn update(
        &self,
        id: i64,
        changes: LocationChanges,
    ) -> Result<Option<LocationEntity>, SqlxError> {
        let sql = format!(
            r#"
            UPDATE locations
            SET name = COALESCE(?1, name),
                latitude = COALESCE(?2, latitude),
                longitude = COALESCE(?3, longitude),
                updated_at = ?4
            WHERE id = ?5
            RETURNING {}
            "#,
            LOCATION_COLUMNS
        );

        sqlx::query_as::<_, LocationEntity>(&sql)
            .bind(changes.name)
            .bind(changes.latitude)
            .bind(changes.longitude)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.db)
            .await
    }

    /// 删除位置，返回是否确实删除了记录
    pub async fn delete(&self, id: i64) -> Result<bool, SqlxError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    async fn operation() -> LocationOperation {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        LocationOperation::new(pool)
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let ops = operation().await;

        let boise = ops.create("Boise", 43.6, -116.2).await.unwrap();
        let oslo = ops.create("Oslo", 59.9, 10.7).await.unwrap();

        assert!(oslo.id > boise.id);
        assert_eq!(boise.name, "Boise");
        assert_eq!(boise.latitude, 43.6);
        assert_eq!(boise.longitude, -116.2);
        let names: Vec<_> = ops
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Boise", "Oslo"]);
    }

    #[tokio::test]
    async fn update_keeps_unspecified_fields() {
        let ops = operation().await;
        let created = ops.create("Boise", 43.6, -116.2).await.unwrap();

        let updated = ops
            .update(
                created.id,
                LocationChanges {
                    name: Some("Boise, ID".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Boise, ID");
        assert_eq!(updated.latitude, 43.6);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn missing_rows_are_reported_not_errors() {
        let ops = operation().await;

        assert!(ops.find_by_id(999).await.unwrap().is_none());
        assert!(ops.update(999, LocationChanges::default()).await.unwrap().is_none());
        assert!(!ops.delete(999).await.unwrap());
    }

    #[tokio::test]
    async fn delete_is_permanent() {
        let ops = operation().await;
        let created = ops.create("Boise", 43.6, -116.2).await.unwrap();

        assert!(ops.delete(created.id).await.unwrap());
        assert!(ops.find_by_id(created.id).await.unwrap().is_none());
        assert!(!ops.delete(created.id).await.unwrap());
    }
}
