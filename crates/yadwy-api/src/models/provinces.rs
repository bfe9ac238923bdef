use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: i64,
    pub name: LocalizedName,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub shipping_fee: f64,
    #[serde(default)]
    pub is_active: bool,
}

/// Some deployments wrap the list as `{"provinces": [...]}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProvincesBody {
    List(Vec<Province>),
    Wrapped { provinces: Vec<Province> },
}

impl From<ProvincesBody> for Vec<Province> {
    fn from(body: ProvincesBody) -> Self {
        match body {
            ProvincesBody::List(provinces) | ProvincesBody::Wrapped { provinces } => provinces,
        }
    }
}
