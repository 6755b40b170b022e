use serde::Deserialize;

use crate::database::LocationChanges;

#[derive(Debug, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// 部分更新，缺省字段保持不变
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdateLocationRequest> for LocationChanges {
    fn from(req: UpdateLocationRequest) -> Self {
        Self {
            name: req.name,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}
