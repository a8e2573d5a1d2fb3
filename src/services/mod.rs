/// サービス層
///
/// トランスポートクライアントと、その上に乗るリソース別ドメインサービス、
/// およびそれらを束ねる合成ルートを提供する。
pub mod api_client;
pub mod container;
pub mod expense_service;
pub mod report_service;
pub mod trip_service;

pub use api_client::{ApiClient, HttpClient};
pub use container::ServiceContainer;
pub use expense_service::{ExpenseApi, ExpenseService};
pub use report_service::{ReportApi, ReportService};
pub use trip_service::{TripApi, TripService};

#[cfg(test)]
pub(crate) mod testing {
    use super::api_client::HttpClient;
    use crate::errors::AppResult;
    use async_trait::async_trait;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use std::sync::Mutex;

    /// 記録された呼び出し
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub method: String,
        pub path: String,
        pub body: Option<serde_json::Value>,
    }

    /// 呼び出しを記録し、固定レスポンスを返すテスト用クライアント
    pub struct RecordingClient {
        calls: Mutex<Vec<RecordedCall>>,
        response: serde_json::Value,
    }

    impl RecordingClient {
        pub fn new(response: serde_json::Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response,
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, method: &str, path: &str, body: Option<serde_json::Value>) {
            self.calls.lock().unwrap().push(RecordedCall {
                method: method.to_string(),
                path: path.to_string(),
                body,
            });
        }
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T> {
            self.record("GET", path, None);
            Ok(serde_json::from_value(self.response.clone())?)
        }

        async fn post<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
            &self,
            path: &str,
            body: &B,
        ) -> AppResult<T> {
            self.record("POST", path, Some(serde_json::to_value(body)?));
            Ok(serde_json::from_value(self.response.clone())?)
        }

        async fn put<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
            &self,
            path: &str,
            body: &B,
        ) -> AppResult<T> {
            self.record("PUT", path, Some(serde_json::to_value(body)?));
            Ok(serde_json::from_value(self.response.clone())?)
        }

        async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T> {
            self.record("DELETE", path, None);
            Ok(serde_json::from_value(self.response.clone())?)
        }
    }
}
