use crate::config::ApiConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// リクエストの固定タイムアウト
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 汎用HTTP呼び出しのインターフェース
///
/// ドメインサービスはこのトレイト越しにのみ通信を行う。
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GETリクエストを送信し、JSONレスポンスを型Tとして取得する
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T>;

    /// POSTリクエストを送信し、JSONレスポンスを型Tとして取得する
    async fn post<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T>;

    /// PUTリクエストを送信し、JSONレスポンスを型Tとして取得する
    async fn put<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T>;

    /// DELETEリクエストを送信し、JSONレスポンスを型Tとして取得する
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T>;
}

/// バックエンドAPIへのトランスポートクライアント
///
/// ベースURLと固定タイムアウトで一度だけ構築される。失敗（接続エラー、
/// タイムアウト、非2xxステータス）は分類せず、メソッドとパスをログに
/// 記録した上でそのまま呼び出し元へ伝播する。リトライは行わない。
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// APIクライアントを初期化する
    ///
    /// # 引数
    /// * `config` - API接続設定
    ///
    /// # 戻り値
    /// APIクライアント、または構築に失敗した場合はエラー
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        // パス結合時の二重スラッシュを避けるため末尾スラッシュを除去
        let base_url = config.base_url.trim_end_matches('/').to_string();

        log::info!("APIクライアントを初期化しました: base_url={base_url}");

        Ok(Self { client, base_url })
    }

    /// パスから完全なエンドポイントURLを構築する
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// リクエストを送信し、レスポンスボディをJSONとして解析する
    ///
    /// 失敗時はメソッドとパスを記録してから元のエラーを返す。
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        let result = async {
            let response = request.send().await?;
            let response = response.error_for_status()?;
            response.json::<T>().await
        }
        .await;

        match result {
            Ok(value) => {
                log::debug!("{method} {path} が成功しました");
                Ok(value)
            }
            Err(e) => {
                log::error!("{method} {path} の呼び出しに失敗しました: {e}");
                Err(AppError::Http(e))
            }
        }
    }
}

#[async_trait]
impl HttpClient for ApiClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T> {
        let request = self.client.get(self.endpoint(path));
        self.dispatch("GET", path, request).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.client.post(self.endpoint(path)).json(body);
        self.dispatch("POST", path, request).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.client.put(self.endpoint(path)).json(body);
        self.dispatch("PUT", path, request).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> AppResult<T> {
        let request = self.client.delete(self.endpoint(path));
        self.dispatch("DELETE", path, request).await
    }
}
