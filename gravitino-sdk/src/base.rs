use gravitino_types::{
    error::{Error, ErrorResponse, Result},
    response::RestResponse,
};
use reqwest::{header::ACCEPT, Method, RequestBuilder, Url};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

const ACCEPT_GRAVITINO_V1: &str = "application/vnd.gravitino.v1+json";

fn transport_error(err: &reqwest::Error) -> Error {
    Error::Transport(format!("{err:#}"))
}

pub(crate) struct BaseClient {
    api_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl BaseClient {
    pub fn new(api_url: impl ToString) -> Self {
        let api_url = api_url.to_string().trim_end_matches('/').to_string();
        Self {
            api_url,
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    pub async fn set_token(&self, token: Option<String>) {
        let mut current = self.token.write().await;
        *current = token;
    }

    fn url(&self, segments: &[String]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|err| Error::Transport(format!("invalid server uri `{}`: {err}", self.api_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::Transport(format!("server uri `{}` cannot be a base", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request(&self, method: Method, segments: &[String]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        debug!(%method, %url, "sending request");
        let mut request_builder = self
            .http
            .request(method, url)
            .header(ACCEPT, ACCEPT_GRAVITINO_V1);
        if let Some(token) = self.token.read().await.as_ref() {
            request_builder = request_builder.bearer_auth(token);
        }
        Ok(request_builder)
    }

    /// Sends the request, decodes the body into `R` and validates it.
    ///
    /// Non-successful statuses are decoded as the server's error envelope.
    async fn send<R: RestResponse>(rb: RequestBuilder) -> Result<R> {
        let resp = rb.send().await.map_err(|err| transport_error(&err))?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|err| transport_error(&err))?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(err) => err.into(),
                Err(_) => Error::InvalidResponse(format!(
                    "unexpected status `{status}` without an error body"
                )),
            });
        }

        let resp: R = serde_json::from_slice(&body)
            .map_err(|err| Error::InvalidResponse(format!("malformed response body: {err}")))?;
        resp.validate()?;
        Ok(resp)
    }

    pub async fn get<R: RestResponse>(
        &self,
        segments: &[String],
        query: &[(&str, String)],
    ) -> Result<R> {
        let request_builder = self.request(Method::GET, segments).await?.query(query);
        Self::send(request_builder).await
    }

    pub async fn delete<R: RestResponse>(
        &self,
        segments: &[String],
        query: &[(&str, String)],
    ) -> Result<R> {
        let request_builder = self.request(Method::DELETE, segments).await?.query(query);
        Self::send(request_builder).await
    }

    pub async fn put<T: Serialize, R: RestResponse>(
        &self,
        segments: &[String],
        body: &T,
    ) -> Result<R> {
        let request_builder = self.request(Method::PUT, segments).await?.json(body);
        Self::send(request_builder).await
    }

    pub async fn post<T: Serialize, R: RestResponse>(
        &self,
        segments: &[String],
        body: &T,
    ) -> Result<R> {
        let request_builder = self.request(Method::POST, segments).await?.json(body);
        Self::send(request_builder).await
    }
}
