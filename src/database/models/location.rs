// 位置实体
// 定义位置相关的数据库实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 位置实体，对应数据库中的 locations 表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LocationEntity {
    /// 位置ID，创建时由数据库分配
    pub id: i64,
    /// 位置名称
    pub name: String,
    /// 纬度
    pub latitude: f64,
    /// 经度
    pub longitude: f64,
    /// 创建时间
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// 更新时间
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
