use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
}

#[derive(Debug, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self { address }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let client = Client::new();
        let url = format!("{}/{}", self.address, path);
        client.request(method, &url)
    }

    async fn send(&self, builder: RequestBuilder) -> APIResponse<Response> {
        builder.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })
    }

    async fn check_status_code(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<Response> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }
        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            _ => APIErrorVariant::UnexpectedStatusCode(status),
        };
        let message = res.text().await.unwrap_or_default();
        Err(APIError { variant, message })
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.check_status_code(res, expected_status_code).await?;
        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(self.get_client(Method::GET, path)).await?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .send(self.get_client(Method::POST, path).json(&body))
            .await?;
        self.handle_api_response(res, expected_status_code).await
    }

    /// For endpoints answering with a status code the body of which can
    /// not be relied on over HTTP, e.g. `204 No Content`
    pub async fn put_expect_status<S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<()> {
        let res = self
            .send(self.get_client(Method::PUT, path).json(&body))
            .await?;
        self.check_status_code(res, expected_status_code)
            .await
            .map(|_| ())
    }

    pub async fn delete_expect_status(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<()> {
        let res = self.send(self.get_client(Method::DELETE, path)).await?;
        self.check_status_code(res, expected_status_code)
            .await
            .map(|_| ())
    }
}
