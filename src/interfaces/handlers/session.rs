use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::Payload,
    FromRequest, HttpRequest, HttpResponse,
};
use dashmap::DashMap;
use futures_util::future::{ready, Ready};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::AppError,
    handlers::component::Component,
    repositories::data_store::DataStore,
    use_cases::project_editor::ProjectEditor,
};

pub const SESSION_HEADER: &str = "x-admin-session";
pub const SESSION_COOKIE: &str = "admin_session";

const MAX_SESSION_ID_LEN: usize = 64;
const EDITOR_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// The admin UI session a request belongs to.
///
/// Taken from the `x-admin-session` header, then the `admin_session`
/// cookie. A request carrying neither starts a new session whose id is
/// handed back as a cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub id: String,
    fresh: bool,
}

impl AdminSession {
    fn from_http(req: &HttpRequest) -> Result<Self, AppError> {
        let provided = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| req.cookie(SESSION_COOKIE).map(|c| c.value().to_string()));

        match provided {
            Some(id) if valid_session_id(&id) => Ok(AdminSession { id, fresh: false }),
            Some(_) => Err(AppError::BadRequest("Invalid admin session id".to_string())),
            None => Ok(AdminSession {
                id: Uuid::new_v4().to_string(),
                fresh: true,
            }),
        }
    }

    /// 200 JSON response, setting the session cookie when it was just issued.
    pub fn respond<B: Serialize>(&self, body: &B) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        if self.fresh {
            builder.cookie(
                Cookie::build(SESSION_COOKIE, self.id.clone())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Strict)
                    .finish(),
            );
        }
        builder.json(body)
    }
}

fn valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromRequest for AdminSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(AdminSession::from_http(req))
    }
}

struct EditorEntry {
    editor: Arc<Component<ProjectEditor>>,
    last_seen: Instant,
}

/// One project editor per admin session, so sessions never share an
/// editing target.
pub struct EditorSessions {
    store: Arc<dyn DataStore>,
    editors: DashMap<String, EditorEntry>,
    idle_timeout: Duration,
}

impl EditorSessions {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self::with_idle_timeout(store, EDITOR_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(store: Arc<dyn DataStore>, idle_timeout: Duration) -> Self {
        EditorSessions {
            store,
            editors: DashMap::new(),
            idle_timeout,
        }
    }

    /// The session's editor, created on first use.
    pub fn editor(&self, session_id: &str) -> Arc<Component<ProjectEditor>> {
        let now = Instant::now();
        if let Some(mut entry) = self.editors.get_mut(session_id) {
            entry.last_seen = now;
            return entry.editor.clone();
        }

        self.purge_idle(now);
        debug!(session = %session_id, "Opening project editor");
        self.editors
            .entry(session_id.to_string())
            .or_insert_with(|| EditorEntry {
                editor: Arc::new(Component::new("project", ProjectEditor::new(self.store.clone()))),
                last_seen: now,
            })
            .editor
            .clone()
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    /// Drops editors nobody touched within the idle timeout; editors still
    /// borrowed by an in-flight request are kept.
    fn purge_idle(&self, now: Instant) {
        self.editors.retain(|_, entry| {
            now.duration_since(entry.last_seen) < self.idle_timeout
                || Arc::strong_count(&entry.editor) > 1
        });
    }
}
