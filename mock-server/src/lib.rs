//! In-memory stand-in for the Grepper answers API.
//!
//! Serves the three endpoints the client uses, with basic-auth checking and
//! a small seeded store, so the client can be exercised over real HTTP.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Form, Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub const UPDATE_CONTENT_FIELD: &str = "answer[content]";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u64,
    pub content: String,
    pub title: String,
    pub author_name: String,
    pub author_profile_url: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub object: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub object: String,
    pub data: Vec<Answer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub id: u64,
    pub success: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub similarity: Option<i32>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Answer>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    api_key: Arc<str>,
}

fn answer(id: u64, title: &str, content: &str, author: &str, upvotes: i64) -> Answer {
    Answer {
        id,
        content: content.to_string(),
        title: title.to_string(),
        author_name: author.to_string(),
        author_profile_url: format!("https://www.grepper.com/profile/{author}"),
        upvotes,
        downvotes: 0,
        object: "answer".to_string(),
    }
}

/// Answers every fresh app starts with. Answer 2 stores a JSON document.
pub fn seed() -> BTreeMap<u64, Answer> {
    [
        answer(
            1,
            "javascript loop array backwards",
            "for (let i = arr.length - 1; i >= 0; i--) {}",
            "ann",
            12,
        ),
        answer(
            2,
            "javascript loop object keys",
            r#"{"lang":"javascript","code":"Object.keys(o).forEach(k => {})"}"#,
            "bo",
            7,
        ),
        answer(3, "rust loop over vec", "for x in &v {}", "cy", 3),
    ]
    .into_iter()
    .map(|a| (a.id, a))
    .collect()
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(seed())),
        api_key: Arc::from(api_key),
    };
    Router::new()
        .route("/v1/answers/search", get(search_answers))
        .route("/v1/answers/{id}", get(get_answer).post(update_answer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

/// Accept only `Basic base64("{api_key}:")`, ignoring the password.
fn authorize(headers: &HeaderMap, api_key: &str) -> Result<(), StatusCode> {
    let decoded = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|token| STANDARD.decode(token).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    match decoded.split_once(':') {
        Some((user, _)) if user == api_key => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Percentage of query words present in the title.
fn similarity_score(query: &str, title: &str) -> i32 {
    let title_words: Vec<String> = title.split_whitespace().map(str::to_lowercase).collect();
    let query_words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if query_words.is_empty() {
        return 0;
    }
    let hits = query_words.iter().filter(|w| title_words.contains(w)).count();
    i32::try_from(hits * 100 / query_words.len()).unwrap_or(0)
}

async fn search_answers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, StatusCode> {
    authorize(&headers, &state.api_key)?;
    let query = params.query.unwrap_or_default();
    let similarity = params.similarity.unwrap_or(60);
    if query.trim().is_empty() || !(1..=100).contains(&similarity) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let db = state.db.read().await;
    let data = db
        .values()
        .filter(|a| similarity_score(&query, &a.title) >= similarity)
        .cloned()
        .collect();
    Ok(Json(SearchResponse {
        object: "list".to_string(),
        data,
    }))
}

async fn get_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<Answer>, StatusCode> {
    authorize(&headers, &state.api_key)?;
    let db = state.db.read().await;
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<UpdateResponse>, StatusCode> {
    authorize(&headers, &state.api_key)?;
    let content = form
        .get(UPDATE_CONTENT_FIELD)
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut db = state.db.write().await;
    let answer = db.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    answer.content.clone_from(content);
    tracing::info!(id, "answer content updated");
    Ok(Json(UpdateResponse {
        id,
        success: "true".to_string(),
    }))
}
