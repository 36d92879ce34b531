use crate::config::ApiConfig;
use crate::store::User;
use crate::{Error, Result};
use corexia_types::{decode_datasets, Dataset};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking client for the platform REST API.
///
/// Only the endpoints the console consumes are implemented; transport
/// and decode failures surface as typed errors so the data source can
/// decide on fixture fallback.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    name: String,
    email: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, endpoint: &str) -> Result<reqwest::blocking::Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http.get(&url).header("accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response)
    }

    /// `GET /datasets`, decoded through the record schema.
    pub fn list_datasets(&self) -> Result<Vec<Dataset>> {
        let body = self.get("/datasets")?.text()?;
        Ok(decode_datasets(&body)?)
    }

    /// `POST /auth/login`, the platform's mock login.
    pub fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .json(&LoginRequest { email, password })
            .send()?;

        if !response.status().is_success() {
            return Err(Error::Auth(format!(
                "login rejected with HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: LoginResponse = response.json()?;
        if body.token.is_empty() || body.user.email.is_empty() {
            return Err(Error::Auth("invalid login response".to_string()));
        }

        Ok((
            User {
                name: body.user.name,
                email: body.user.email,
            },
            body.token,
        ))
    }
}
