use serde::{Deserialize, Serialize};
use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP通信関連のエラー（接続失敗、タイムアウト、非2xxステータス）
    ///
    /// トランスポート層は失敗を分類・回復せず、そのまま呼び出し元へ伝播する。
    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    /// バリデーション関連のエラー（送信前のクライアント側検証）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（通信の一時的エラーなど）
    Medium,
    /// 高重要度（設定エラーなど）
    High,
}

impl AppError {
    /// ユーザーに表示するためのフレンドリーなメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(e) if e.is_timeout() => {
                "サーバーへの接続がタイムアウトしました".to_string()
            }
            AppError::Http(_) => "サーバーとの通信でエラーが発生しました".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Configuration(_) => "設定エラーが発生しました".to_string(),
            AppError::Json(_) => "データ形式の解析でエラーが発生しました".to_string(),
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Http(_) => ErrorSeverity::Medium,
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - バリデーションエラーメッセージ
    ///
    /// # 戻り値
    /// バリデーションエラー
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    ///
    /// # 戻り値
    /// 設定エラー
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// 失敗した操作がユーザーに見せる統一エラー形式
///
/// 非同期操作コントローラだけがこの形式を生成する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorState {
    /// ユーザー向けメッセージ
    pub message: String,
    /// エラーコード（HTTPステータスなど、判別できる場合のみ）
    pub code: Option<String>,
    /// 詳細情報（ログ・デバッグ用）
    pub details: Option<String>,
}

impl From<&AppError> for ErrorState {
    fn from(error: &AppError) -> Self {
        let code = match error {
            AppError::Http(e) => e.status().map(|s| s.as_u16().to_string()),
            _ => None,
        };

        ErrorState {
            message: error.user_message(),
            code,
            details: Some(error.details()),
        }
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
