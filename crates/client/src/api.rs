//! Blocking HTTP transport for the `/data` endpoints.
//!
//! One request per user action, no timeout, no retry, no cancellation. A
//! non-success status is surfaced as [`ClientError::Api`] carrying the
//! server's `message` body when one can be parsed.

use marquee_api_shared::{CreateMovieReq, DeleteMovieReq, MessageRes, MovieRes, UpdateMovieReq};
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// HTTP client bound to a Marquee server base URL.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    fn data_url(&self) -> String {
        format!("{}/data", self.base_url)
    }

    pub fn list(&self) -> ClientResult<Vec<MovieRes>> {
        let response = self.http.get(self.data_url()).send()?;
        parse(response)
    }

    pub fn create(&self, name: &str, image: &str, summary: &str) -> ClientResult<MovieRes> {
        let body = CreateMovieReq {
            name: Some(name.to_owned()),
            image: Some(image.to_owned()),
            summary: Some(summary.to_owned()),
        };
        let response = self.http.post(self.data_url()).json(&body).send()?;
        parse(response)
    }

    pub fn update(
        &self,
        id: &str,
        name: &str,
        image: &str,
        summary: &str,
    ) -> ClientResult<MovieRes> {
        let body = UpdateMovieReq {
            id: Some(id.to_owned()),
            name: Some(name.to_owned()),
            image: Some(image.to_owned()),
            summary: Some(summary.to_owned()),
        };
        let response = self.http.put(self.data_url()).json(&body).send()?;
        parse(response)
    }

    pub fn delete(&self, id: &str) -> ClientResult<()> {
        let body = DeleteMovieReq {
            id: Some(id.to_owned()),
        };
        let response = self.http.delete(self.data_url()).json(&body).send()?;
        parse::<MessageRes>(response).map(|_| ())
    }
}

fn parse<T: DeserializeOwned>(response: reqwest::blocking::Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }
    let message = response
        .json::<MessageRes>()
        .map(|m| m.message)
        .unwrap_or_else(|_| "request failed".to_owned());
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
