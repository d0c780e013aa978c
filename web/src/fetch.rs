//! `Transport` over the browser's fetch, through `gloo-net`.
//!
//! A completed fetch is always a response, whatever its status; only a
//! network failure or an unreadable body becomes `ApiError::Transport`.
//! No timeout and no abort signal are attached.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use todo_view::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, gloo_net::Error> {
        let builder = builder(&request);
        let response = match request.body {
            Some(body) => builder.body(body)?.send().await?,
            None => builder.send().await?,
        };

        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn builder(request: &HttpRequest) -> RequestBuilder {
    let builder = match request.method {
        HttpMethod::Get => Request::get(&request.path),
        HttpMethod::Post => Request::post(&request.path),
        HttpMethod::Put => Request::put(&request.path),
        HttpMethod::Delete => Request::delete(&request.path),
    };
    request
        .headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name, value))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.fetch(request)
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))
    }
}
