use serde::{Deserialize, Serialize};

/// すべてのエンドポイントレスポンスが共有するエンベロープ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// レスポンス本体
    pub data: T,
    /// 補足メッセージ（任意）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// バックエンドが返すステータスコード
    pub status: u16,
}

impl<T> ApiResponse<T> {
    /// エンベロープを保ったままデータ部分を変換する
    ///
    /// # 引数
    /// * `f` - データ変換関数
    ///
    /// # 戻り値
    /// 変換後のエンベロープ
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            message: self.message,
            status: self.status,
        }
    }
}

/// 非同期操作のライフサイクル状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadingState {
    /// 未実行
    Idle,
    /// 実行中
    Loading,
    /// 成功
    Success,
    /// 失敗
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_map() {
        // map変換でエンベロープのメタ情報が保持されることを確認
        let response = ApiResponse {
            data: 21,
            message: Some("ok".to_string()),
            status: 200,
        };

        let mapped = response.map(|n| n * 2);
        assert_eq!(mapped.data, 42);
        assert_eq!(mapped.message, Some("ok".to_string()));
        assert_eq!(mapped.status, 200);
    }

    #[test]
    fn test_api_response_deserialization() {
        // messageが省略されたレスポンスも読み取れることを確認
        let json = r#"{"data": {"value": 1}, "status": 200}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.message, None);
        assert_eq!(response.data["value"], 1);
    }
}
