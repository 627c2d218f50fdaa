use chrono::{DateTime, NaiveDate, Utc};
use conform_git_provider::{GitProvider, ProviderError};
use conform_github_models::{
    ApiErrorBody, GraphQlRequest, GraphQlResponse, NodeData, PullRequestNode, SimpleUser,
    ViewerData,
};
use conform_pr_models::{Member, PullRequest};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};

use crate::pagination::next_page;
use crate::pull_request::{PULL_REQUEST_QUERY, decode_pull_request};

const USER_AGENT: &str = "conform/0.1 (+https://github.com/BSteffaniak/conform)";
const MEMBERS_PER_PAGE: u32 = 100;

const VIEWER_QUERY: &str = "query { viewer { login } rateLimit { limit remaining resetAt } }";

pub struct GitHubProvider {
    http_client: reqwest::Client,
    auth_token: Option<String>,
    graphql_token: Option<String>,
    base_url: String,
    graphql_url: String,
    today: Option<NaiveDate>,
}

/// Authenticated user and the rate limit state of its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStatus {
    pub login: String,
    pub limit: Option<u64>,
    pub remaining: Option<u64>,
    pub reset_at: Option<DateTime<Utc>>,
}

impl std::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unknown = || "?".to_string();
        write!(
            f,
            "User: {}, rate limit: {}/{}, resets at: {}.",
            self.login,
            self.remaining.map_or_else(unknown, |n| n.to_string()),
            self.limit.map_or_else(unknown, |n| n.to_string()),
            self.reset_at.map_or_else(unknown, |at| at.to_rfc3339()),
        )
    }
}

impl GitHubProvider {
    #[must_use]
    pub fn new() -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            auth_token: None,
            graphql_token: None,
            base_url: "https://api.github.com".to_string(),
            graphql_url: "https://api.github.com/graphql".to_string(),
            today: None,
        }
    }

    /// Token used for REST calls.
    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Token used for GraphQL calls. Reading project fields needs the
    /// `read:project` scope, which the workflow token does not have.
    #[must_use]
    pub fn with_graphql_token(mut self, token: String) -> Self {
        self.graphql_token = Some(token);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_graphql_url(mut self, graphql_url: String) -> Self {
        self.graphql_url = graphql_url;
        self
    }

    /// Pin the date used to decide which iterations are current.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Query the authenticated user to check that the REST token works.
    ///
    /// # Errors
    ///
    /// * If the request fails or the token is rejected
    pub async fn token_status(&self) -> Result<TokenStatus, ProviderError> {
        let url = format!("{}/user", self.base_url);
        let response = self.rest_get(&url).await?;
        let headers = response.headers().clone();
        let user: SimpleUser = read_json(response).await?;

        Ok(TokenStatus {
            login: user.login,
            limit: header_u64(&headers, "x-ratelimit-limit"),
            remaining: header_u64(&headers, "x-ratelimit-remaining"),
            reset_at: header_u64(&headers, "x-ratelimit-reset")
                .and_then(|secs| i64::try_from(secs).ok())
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        })
    }

    /// Query the viewer and the GraphQL rate limit to check that the
    /// GraphQL token works.
    ///
    /// # Errors
    ///
    /// * If the request fails, the token is rejected or the query returns errors
    pub async fn graphql_token_status(&self) -> Result<TokenStatus, ProviderError> {
        let body = GraphQlRequest {
            query: VIEWER_QUERY,
            variables: serde_json::json!({}),
        };

        log::debug!("POST {} (viewer)", self.graphql_url);
        let data: ViewerData = self
            .graphql_post(&body)
            .await?
            .ok_or_else(|| ProviderError::GraphQl("empty viewer response".to_string()))?;
        let rate_limit = data.rate_limit;

        Ok(TokenStatus {
            login: data.viewer.login,
            limit: rate_limit.as_ref().map(|r| r.limit),
            remaining: rate_limit.as_ref().map(|r| r.remaining),
            reset_at: rate_limit
                .and_then(|r| r.reset_at)
                .and_then(|at| DateTime::parse_from_rfc3339(&at).ok())
                .map(|at| at.with_timezone(&Utc)),
        })
    }

    async fn graphql_post<T: serde::de::DeserializeOwned>(
        &self,
        body: &GraphQlRequest<'_>,
    ) -> Result<Option<T>, ProviderError> {
        let mut request = self
            .http_client
            .post(&self.graphql_url)
            .header("Accept", "application/json")
            .json(body);

        if let Some(token) = self.graphql_token.as_ref().or(self.auth_token.as_ref()) {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport)?;
        let response = check_status(response, &self.graphql_url).await?;
        let response: GraphQlResponse<T> = read_json(response).await?;

        if !response.errors.is_empty() {
            let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(ProviderError::GraphQl(messages.join("; ")));
        }

        Ok(response.data)
    }

    async fn rest_get(&self, url: &str) -> Result<Response, ProviderError> {
        log::debug!("GET {url}");
        let mut request = self
            .http_client
            .get(url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport)?;
        check_status(response, url).await
    }
}

impl Default for GitHubProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GitProvider for GitHubProvider {
    async fn list_public_members(&self, org: &str) -> Result<Vec<Member>, ProviderError> {
        let mut members = Vec::new();
        let mut page = Some(1);

        while let Some(current) = page {
            let url = format!(
                "{}/orgs/{}/public_members?per_page={MEMBERS_PER_PAGE}&page={current}",
                self.base_url,
                urlencoding::encode(org),
            );
            let response = self.rest_get(&url).await?;

            page = response
                .headers()
                .get("link")
                .and_then(|v| v.to_str().ok())
                .and_then(next_page);

            if let Some(next) = page.filter(|&next| next <= current) {
                log::warn!(
                    "Link header of {org} members page {current} points back to page {next}, stopping"
                );
                page = None;
            }

            let users: Vec<SimpleUser> = read_json(response).await?;
            log::debug!("Got {} member(s) of {org} on page {current}", users.len());
            members.extend(users.into_iter().map(|user| Member { login: user.login }));
        }

        Ok(members)
    }

    async fn get_pull_request(&self, node_id: &str) -> Result<PullRequest, ProviderError> {
        let body = GraphQlRequest {
            query: PULL_REQUEST_QUERY,
            variables: serde_json::json!({ "nodeID": node_id }),
        };

        log::debug!("POST {} (pull request {node_id})", self.graphql_url);
        let data: Option<NodeData> = self.graphql_post(&body).await?;

        let node = data
            .and_then(|data| data.node)
            .filter(|node| node.get("title").is_some())
            .ok_or_else(|| ProviderError::NotFound(format!("pull request {node_id}")))?;

        let node: PullRequestNode = serde_json::from_value(node)?;
        let pr = decode_pull_request(node, self.today())?;

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Got:\n{}", serde_json::to_string_pretty(&pr)?);
        }

        Ok(pr)
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}

#[allow(clippy::needless_pass_by_value)]
fn transport(e: reqwest::Error) -> ProviderError {
    ProviderError::Transport(e.to_string())
}

async fn check_status(response: Response, url: &str) -> Result<Response, ProviderError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    log::error!("GitHub API error for {url}: {status}: {text}");
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized(message),
        StatusCode::NOT_FOUND => ProviderError::NotFound(url.to_string()),
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let text = response.text().await.map_err(transport)?;
    log::trace!("Response:\n{text}");
    Ok(serde_json::from_str(&text)?)
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
