use axum::{
    extract::{Form, Json, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::auth::CredentialTable;
use crate::config::ServerConfig;
use crate::error::GameError;
use crate::games::{
    self, create_rng, AnswerOutcome, GameRng, NavarasaSession, Note, PatternRound,
    PatternVerdict, QuestionPayload, SourMelody, SourVerdict,
};
use crate::guard::{self, ApiUser, PageUser, LOGIN_PATH};
use crate::pages::{self, Page};
use crate::session::SessionStore;

const HOME_PATH: &str = "/home";

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub credentials: Arc<CredentialTable>,
    pub rng: Arc<Mutex<GameRng>>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(config.session_ttl)),
            credentials: Arc::new(CredentialTable::new()),
            rng: Arc::new(Mutex::new(create_rng(config.rng_seed))),
            static_dir: config.static_dir.clone(),
        }
    }

    /// Per-request generator. The shared lock is held only for the fork.
    pub async fn fork_rng(&self) -> GameRng {
        let mut shared = self.rng.lock().await;
        games::fork_rng(&mut shared)
    }
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

fn default_level() -> i64 {
    1
}

#[derive(Deserialize)]
struct GeneratePatternRequest {
    #[serde(default = "default_level")]
    level: i64,
}

#[derive(Deserialize)]
struct CheckPatternRequest {
    #[serde(default)]
    user_pattern: Vec<Note>,
    #[serde(default)]
    correct_pattern: Vec<Note>,
    #[serde(default = "default_level")]
    level: i64,
}

#[derive(Deserialize)]
struct CheckSourRequest {
    guessed_index: i64,
    correct_index: i64,
}

#[derive(Deserialize)]
struct SubmitAnswerRequest {
    answer: String,
}

pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "OK" }))
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", get(logout))
        .route("/home", get(home))
        .route("/practice", get(practice))
        .route("/pattern", get(pattern))
        .route("/compose", get(compose))
        .route("/sour", get(sour))
        .route("/navarasa", get(navarasa))
        .route("/generate_pattern", post(generate_pattern))
        .route("/check_answer", post(check_answer))
        .route("/generate_sour_note_melody", post(generate_sour_note_melody))
        .route("/check_sour_note", post(check_sour_note))
        .route("/get_question", get(get_question))
        .route("/submit_answer", post(submit_answer))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!("🎵 Initializing Swara Games server...");

    let state = AppState::new(&config);
    if config.rng_seed.is_some() {
        info!("Round content seeded deterministically");
    }
    let app = app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Swara Games listening at http://{}", addr);
    axum::serve(listener, app).await.context("Server terminated")?;

    Ok(())
}

// --- Login & navigation ---

async fn root(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    match guard::current_user(&state, &headers).await {
        Some(_) => Redirect::to(HOME_PATH),
        None => Redirect::to(LOGIN_PATH),
    }
}

async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if guard::current_user(&state, &headers).await.is_some() {
        return Redirect::to(HOME_PATH).into_response();
    }
    pages::login(None).into_response()
}

async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    if guard::current_user(&state, &headers).await.is_some() {
        return Redirect::to(HOME_PATH).into_response();
    }

    match state.credentials.authenticate(&form.username, &form.password) {
        Ok(user) => {
            let id = state.sessions.create(user).await;
            match guard::session_cookie(&id) {
                Ok(cookie) => ([cookie], Redirect::to(HOME_PATH)).into_response(),
                Err(err) => {
                    error!("Session cookie for '{}' could not be encoded: {}", id, err);
                    state.sessions.destroy(&id).await;
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
        Err(err) => (err.status(), pages::login(Some(&err.to_string()))).into_response(),
    }
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = guard::session_id(&headers) {
        state.sessions.destroy(&id).await;
    }
    ([guard::clear_session_cookie()], Redirect::to(LOGIN_PATH)).into_response()
}

async fn home(_user: PageUser) -> Html<String> {
    pages::render(Page::Home)
}

async fn practice(_user: PageUser) -> Html<String> {
    pages::render(Page::Practice)
}

async fn pattern(_user: PageUser) -> Html<String> {
    pages::render(Page::Pattern)
}

async fn compose(_user: PageUser) -> Html<String> {
    pages::render(Page::Compose)
}

async fn sour(_user: PageUser) -> Html<String> {
    pages::render(Page::Sour)
}

/// Entering the emotion game resets its state for this session.
async fn navarasa(State(state): State<AppState>, user: PageUser) -> Response {
    let fresh = NavarasaSession::enter(&mut state.fork_rng().await);
    let entered = state
        .sessions
        .with_record(&user.session_id, |record| record.navarasa = Some(fresh))
        .await;

    match entered {
        Some(()) => {
            info!("'{}' entered the Navarasa game", user.user);
            pages::render(Page::Navarasa).into_response()
        }
        None => Redirect::to(LOGIN_PATH).into_response(),
    }
}

// --- Pattern recall ---

async fn generate_pattern(
    State(state): State<AppState>,
    _user: ApiUser,
    Json(req): Json<GeneratePatternRequest>,
) -> Result<Json<PatternRound>, GameError> {
    let mut rng = state.rng.lock().await;
    let round = games::generate_pattern(req.level, &mut *rng)?;
    debug!("Pattern round at level {}: {:?}", req.level, round.pattern);
    Ok(Json(round))
}

async fn check_answer(
    _user: ApiUser,
    Json(req): Json<CheckPatternRequest>,
) -> Result<Json<PatternVerdict>, GameError> {
    let verdict = games::check_pattern(&req.user_pattern, &req.correct_pattern, req.level)?;
    debug!("Pattern check at level {}: correct={}", req.level, verdict.correct);
    Ok(Json(verdict))
}

// --- Sour note ---

async fn generate_sour_note_melody(State(state): State<AppState>, _user: ApiUser) -> Json<SourMelody> {
    let mut rng = state.rng.lock().await;
    let round = games::generate_sour_melody(&mut *rng);
    debug!("Sour melody with sour index {}", round.sour_index);
    Json(round)
}

async fn check_sour_note(_user: ApiUser, Json(req): Json<CheckSourRequest>) -> Json<SourVerdict> {
    Json(games::check_sour_note(req.guessed_index, req.correct_index))
}

// --- Navarasa ---

async fn get_question(
    State(state): State<AppState>,
    user: ApiUser,
) -> Result<Json<QuestionPayload>, GameError> {
    let mut rng = state.fork_rng().await;
    let payload = state
        .sessions
        .with_record(&user.session_id, |record| {
            record.navarasa_mut().next_question(&mut rng)
        })
        .await
        .ok_or(GameError::Unauthorized)?;
    if payload.audio.is_none() {
        debug!("Navarasa queue exhausted for '{}'", user.user);
    }
    Ok(Json(payload))
}

async fn submit_answer(
    State(state): State<AppState>,
    user: ApiUser,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<AnswerOutcome>, GameError> {
    let outcome = state
        .sessions
        .with_record(&user.session_id, |record| {
            record.navarasa_mut().submit_answer(&req.answer)
        })
        .await
        .ok_or(GameError::Unauthorized)?;
    debug!(
        "'{}' answered '{}': correct={} score={}",
        user.user, req.answer, outcome.correct, outcome.score
    );
    Ok(Json(outcome))
}
