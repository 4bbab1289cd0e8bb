use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: AlertProperties,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlertProperties {
    pub headline: String,
    pub event: String,
    #[serde(rename = "areaDesc")]
    pub area_desc: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlertCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub features: Vec<Alert>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

#[derive(Deserialize)]
pub struct CreateAlert {
    pub area: String,
    pub headline: String,
    #[serde(default)]
    pub event: Option<String>,
}

#[derive(Deserialize)]
pub struct AreaQuery {
    pub area: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<String, Vec<Alert>>>>;

type ProblemResponse = (StatusCode, Json<Problem>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/alerts/active", get(active_alerts))
        .route("/alerts", post(create_alert).delete(clear_alerts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn collection_title(area: &str) -> String {
    format!("Current watches, warnings, and advisories for {area}")
}

/// The real service only accepts uppercase codes, so this does no folding.
fn validate_area(area: Option<&str>) -> Result<&str, ProblemResponse> {
    match area {
        Some(a) if a.len() == 2 && a.bytes().all(|b| b.is_ascii_uppercase()) => Ok(a),
        Some(a) => Err(bad_request(format!("\"{a}\" is not a valid area code"))),
        None => Err(bad_request("missing required parameter \"area\"".to_string())),
    }
}

fn bad_request(detail: String) -> ProblemResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(Problem {
            title: "Bad Request".to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            detail,
        }),
    )
}

async fn active_alerts(
    State(db): State<Db>,
    Query(query): Query<AreaQuery>,
) -> Result<Json<AlertCollection>, ProblemResponse> {
    let area = validate_area(query.area.as_deref())?;
    let alerts = db.read().await;
    Ok(Json(AlertCollection {
        kind: "FeatureCollection".to_string(),
        title: collection_title(area),
        features: alerts.get(area).cloned().unwrap_or_default(),
    }))
}

async fn create_alert(
    State(db): State<Db>,
    Json(input): Json<CreateAlert>,
) -> Result<(StatusCode, Json<Alert>), ProblemResponse> {
    let area = validate_area(Some(&input.area))?.to_string();
    let alert = Alert {
        id: format!("urn:uuid:{}", Uuid::new_v4()),
        kind: "Feature".to_string(),
        properties: AlertProperties {
            headline: input.headline,
            event: input.event.unwrap_or_else(|| "Special Weather Statement".to_string()),
            area_desc: area.clone(),
        },
    };
    tracing::info!(%area, id = %alert.id, "alert created");
    db.write().await.entry(area).or_default().push(alert.clone());
    Ok((StatusCode::CREATED, Json(alert)))
}

async fn clear_alerts(
    State(db): State<Db>,
    Query(query): Query<AreaQuery>,
) -> Result<StatusCode, ProblemResponse> {
    let area = validate_area(query.area.as_deref())?;
    db.write().await.remove(area);
    Ok(StatusCode::NO_CONTENT)
}
