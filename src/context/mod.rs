/**
 * Per-Request Context
 *
 * This module provides `RequestContext`, the explicit per-request object
 * handlers use for session state and outgoing user notices. There is no
 * ambient request-global state: a handler receives the context as an
 * extractor argument, mutates it, and returns it as part of the response
 * so the cookie change travels back to the client.
 *
 * # Usage
 *
 * ```rust,ignore
 * async fn handler(mut ctx: RequestContext) -> impl IntoResponse {
 *     ctx.flash("Saved.");
 *     (ctx, Redirect::to("/"))
 * }
 * ```
 */
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;

use crate::auth::sessions::{SessionStore, SESSION_COOKIE};
use crate::server::state::AppState;

/// Session accessor and outgoing-notice list for one request
///
/// Built from the incoming session cookie; the cookie is only present in
/// the response when the session changed (login, logout, first notice).
#[derive(Clone)]
pub struct RequestContext {
    sessions: SessionStore,
    jar: CookieJar,
    /// Live session bound to this request, if any
    session_id: Option<String>,
    admin_id: Option<i64>,
}

impl RequestContext {
    /// The authenticated admin identifier, if any
    pub fn admin_id(&self) -> Option<i64> {
        self.admin_id
    }

    /// Whether this request runs under an authenticated session
    pub fn is_authenticated(&self) -> bool {
        self.admin_id.is_some()
    }

    /// Transition to Authenticated with a fresh session
    ///
    /// The previous session (if any) is destroyed; the ID rotates.
    pub fn sign_in(&mut self, admin_id: i64) {
        if let Some(old) = self.session_id.take() {
            self.sessions.clear(&old);
        }
        let session_id = self.sessions.sign_in(admin_id);
        self.set_session_cookie(&session_id);
        self.session_id = Some(session_id);
        self.admin_id = Some(admin_id);
    }

    /// Transition to Anonymous
    pub fn sign_out(&mut self) {
        if let Some(old) = self.session_id.take() {
            self.sessions.clear(&old);
        }
        self.admin_id = None;
        let mut removal = Cookie::from(SESSION_COOKIE);
        removal.set_path("/");
        self.jar = self.jar.clone().remove(removal);
    }

    /// Queue a one-shot notice for the next rendered page
    ///
    /// Creates an anonymous session when none is live, so notices survive
    /// a redirect for logged-out clients too.
    pub fn flash(&mut self, notice: impl Into<String>) {
        let session_id = self.sessions.ensure(self.session_id.as_deref());
        if self.session_id.as_deref() != Some(session_id.as_str()) {
            self.set_session_cookie(&session_id);
        }
        self.sessions.push_notice(&session_id, notice);
        self.session_id = Some(session_id);
    }

    /// Drain the pending notices for rendering
    pub fn take_notices(&mut self) -> Vec<String> {
        match &self.session_id {
            Some(session_id) => self.sessions.take_notices(session_id),
            None => Vec::new(),
        }
    }

    fn set_session_cookie(&mut self, session_id: &str) {
        let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .build();
        self.jar = self.jar.clone().add(cookie);
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let sessions = state.sessions.clone();

        // Only a live store entry counts; stale cookies read as Anonymous.
        let session_id = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|sid| sessions.is_live(sid));
        let admin_id = session_id.as_deref().and_then(|sid| sessions.get(sid));

        Ok(Self {
            sessions,
            jar,
            session_id,
            admin_id,
        })
    }
}

impl IntoResponseParts for RequestContext {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
