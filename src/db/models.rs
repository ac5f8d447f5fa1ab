use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// One request field exactly as the client sent it. The store applies its
/// own column affinity, so `"10"` lands in an INTEGER column as `10`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    /// Arrays and objects, bound as their JSON text.
    Other(Value),
}

/// Request body for both create and full-row update. Fields are not
/// validated; an absent field is bound as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DistrictPayload {
    pub district_name: Scalar,
    pub state_id: Scalar,
    pub cases: Scalar,
    pub cured: Scalar,
    pub active: Scalar,
    pub deaths: Scalar,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StateStats {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStateName {
    pub state_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn district_serializes_camel_case() {
        let district = District {
            district_id: 7,
            district_name: "Ernakulam".to_string(),
            state_id: 17,
            cases: 10,
            cured: 5,
            active: 3,
            deaths: 2,
        };
        assert_eq!(
            serde_json::to_value(&district).unwrap(),
            json!({
                "districtId": 7,
                "districtName": "Ernakulam",
                "stateId": 17,
                "cases": 10,
                "cured": 5,
                "active": 3,
                "deaths": 2
            })
        );
    }

    #[test]
    fn payload_keeps_fields_as_sent() {
        let body = json!({"districtName": "Ernakulam", "stateId": "17", "cases": 1, "cured": [1]});
        let payload: DistrictPayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.district_name, Scalar::Text("Ernakulam".to_string()));
        assert_eq!(payload.state_id, Scalar::Text("17".to_string()));
        assert_eq!(payload.cases, Scalar::Int(1));
        assert_eq!(payload.cured, Scalar::Other(json!([1])));
        assert_eq!(payload.active, Scalar::Null);
        assert_eq!(payload.deaths, Scalar::Null);
    }
}
