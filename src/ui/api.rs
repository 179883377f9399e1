//! Typed client for the BlogGen REST backend
//!
//! Every request carries the session cookie (`credentials: include`).
//! Responses from authenticated endpoints pass through one place that
//! drops the session on 401.

use serde::Serialize;
use serde_json::Value;

use crate::core::article::{
    Article, ArticleId, GenerateRequest, GeneratedArticle, UpdateArticle, parse_generate_response,
};
use crate::core::config::endpoint;
use crate::core::error::{ApiError, decode};
use crate::core::profile::{LoginRequest, PasswordChange, Profile, ProfileUpdate, SignupRequest};
use crate::ui::session::{SessionContext, use_session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Whether a 401 from this call means the session is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// Public endpoint; 401 means bad credentials
    Public,
    /// Needs the session cookie
    Required,
}

/// API client bound to the current session
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionContext,
}

/// Get an API client for the current component tree
pub fn use_api() -> ApiClient {
    ApiClient::new(use_session())
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        auth: Auth,
    ) -> Result<String, ApiError> {
        let url = endpoint(&api_base_url(), path);
        let result = transport::send(method, &url, body).await;

        if let Err(e) = &result {
            leptos::logging::warn!("{:?} {} failed: {}", method, path, e);
        }
        if auth == Auth::Required {
            self.session.observe(&result);
        }
        result
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<String, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.call(method, path, Some(body), auth).await
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Log in; the backend sets the session cookie
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/api/login", request, Auth::Public)
            .await?;
        self.session.mark_authenticated();
        Ok(())
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/api/signup", request, Auth::Public)
            .await
            .map(|_| ())
    }

    /// Log out. Local state is cleared whatever the backend says.
    pub async fn logout(&self) {
        let _ = self
            .call(Method::Post, "/api/logout", None, Auth::Public)
            .await;
        self.session.expire();
    }

    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        let body = self
            .call(Method::Get, "/api/user/me", None, Auth::Required)
            .await?;
        decode(&body)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.send_json(Method::Patch, "/api/user/me", update, Auth::Required)
            .await
            .map(|_| ())
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        self.send_json(
            Method::Post,
            "/api/user/change-password",
            change,
            Auth::Required,
        )
        .await
        .map(|_| ())
    }

    /// Delete the account and forget the session on success
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.call(Method::Delete, "/api/user/me", None, Auth::Required)
            .await?;
        self.session.expire();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Articles
    // ------------------------------------------------------------------

    pub async fn generate(&self, youtube_url: &str) -> Result<GeneratedArticle, ApiError> {
        let request = GenerateRequest {
            youtube_url: youtube_url.to_string(),
        };
        let body = self
            .send_json(Method::Post, "/api/generate-blog", &request, Auth::Required)
            .await?;
        parse_generate_response(&body)
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let body = self
            .call(Method::Get, "/api/blog-posts", None, Auth::Required)
            .await?;
        decode(&body)
    }

    pub async fn article(&self, id: ArticleId) -> Result<Article, ApiError> {
        let body = self
            .call(Method::Get, &article_path(id), None, Auth::Required)
            .await?;
        decode(&body)
    }

    pub async fn update_article(
        &self,
        id: ArticleId,
        update: &UpdateArticle,
    ) -> Result<(), ApiError> {
        self.send_json(Method::Put, &article_path(id), update, Auth::Required)
            .await
            .map(|_| ())
    }

    pub async fn delete_article(&self, id: ArticleId) -> Result<(), ApiError> {
        self.call(Method::Delete, &article_path(id), None, Auth::Required)
            .await
            .map(|_| ())
    }
}

fn article_path(id: ArticleId) -> String {
    format!("/api/blog-posts/{}/", id)
}

/// Backend base URL rendered into the page by the server
#[cfg(not(feature = "ssr"))]
fn api_base_url() -> String {
    use crate::core::config::{API_BASE_META, DEFAULT_API_BASE_URL, normalize_base_url};

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"))
        .map(|url| normalize_base_url(&url))
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(feature = "ssr")]
fn api_base_url() -> String {
    crate::core::config::Config::current().api_base_url.clone()
}

#[cfg(not(feature = "ssr"))]
mod transport {
    use gloo_net::http::{Request, RequestBuilder};
    use serde_json::Value;
    use web_sys::RequestCredentials;

    use super::Method;
    use crate::core::error::ApiError;

    pub(super) async fn send(
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        let builder: RequestBuilder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
        .credentials(RequestCredentials::Include);

        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        match ApiError::from_response(status, &text) {
            Some(err) => Err(err),
            None => Ok(text),
        }
    }
}

#[cfg(feature = "ssr")]
mod transport {
    use serde_json::Value;

    use super::Method;
    use crate::core::error::ApiError;

    pub(super) async fn send(
        _method: Method,
        _url: &str,
        _body: Option<Value>,
    ) -> Result<String, ApiError> {
        Err(ApiError::Network(
            "Not available during server rendering".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_path_has_trailing_slash() {
        assert_eq!(article_path(42), "/api/blog-posts/42/");
    }
}
