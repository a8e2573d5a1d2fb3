use crate::errors::{AppResult, ErrorState};
use crate::models::LoadingState;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// コントローラの内部状態
struct OperationState<T> {
    data: Option<T>,
    loading: LoadingState,
    error: Option<ErrorState>,
    /// 実行中の呼び出しに紐づくキャンセルトークン
    cancel_token: Option<CancellationToken>,
}

impl<T> OperationState<T> {
    fn new() -> Self {
        Self {
            data: None,
            loading: LoadingState::Idle,
            error: None,
            cancel_token: None,
        }
    }
}

/// 非同期操作のライフサイクルコントローラ
///
/// 非同期呼び出しを `{data, loading, error}` の状態でラップする。
/// 新しい `execute` は実行中の呼び出しをキャンセルトークンで置き換え、
/// 置き換えられた呼び出しの結果は成功・失敗を問わず破棄される。
/// つまり、観測可能な状態にコミットできるのは常に最後に発行された
/// 呼び出しだけであり、遅い古いレスポンスが速い新しいレスポンスを
/// 上書きすることはない。
///
/// キャンセルは協調的で、対象のfutureをdropすることでローカルの
/// リクエストを中断する。バックエンド側の処理停止は保証しない。
pub struct AsyncOperation<T> {
    state: Arc<Mutex<OperationState<T>>>,
}

impl<T: Clone> AsyncOperation<T> {
    /// 新しいコントローラを作成する（初期状態はIdle）
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(OperationState::new())),
        }
    }

    /// 非同期操作を実行する
    ///
    /// 前の呼び出しが未完了の場合は先にキャンセルし、この呼び出しを
    /// 最新とする。完了時点で自身が置き換えられていた場合、結果は
    /// 状態に反映されない（エラーの記録すら行わない）。
    ///
    /// # 引数
    /// * `operation` - 実行する非同期操作
    ///
    /// # 戻り値
    /// 成功時は値、失敗・キャンセル時はNone
    pub async fn execute<Fut>(&self, operation: Fut) -> Option<T>
    where
        Fut: Future<Output = AppResult<T>>,
    {
        let token = {
            let mut state = self.state.lock().unwrap();

            // 実行中の呼び出しを置き換える
            if let Some(previous) = state.cancel_token.take() {
                previous.cancel();
            }

            let token = CancellationToken::new();
            state.cancel_token = Some(token.clone());
            state.loading = LoadingState::Loading;
            state.error = None;
            token
        };

        // futureをトークンと競争させる。キャンセル時はfutureがdropされ、
        // 進行中のリクエストはローカルで中断される。
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return None,
            result = operation => result,
        };

        // コミット判定はexecuteがトークンを差し替えるときと同じロックの
        // 下で行い、新しい呼び出しと交錯しないようにする
        let mut state = self.state.lock().unwrap();
        if token.is_cancelled() {
            return None;
        }

        match result {
            Ok(value) => {
                state.data = Some(value.clone());
                state.loading = LoadingState::Success;
                Some(value)
            }
            Err(e) => {
                log::warn!("非同期操作が失敗しました: {e}");
                state.error = Some(ErrorState::from(&e));
                state.loading = LoadingState::Error;
                None
            }
        }
    }

    /// 状態をIdleへ戻す
    ///
    /// 実行中の呼び出しがあればキャンセルし、データとエラーをクリアする。
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(token) = state.cancel_token.take() {
            token.cancel();
        }
        state.data = None;
        state.error = None;
        state.loading = LoadingState::Idle;
    }

    /// 最後にコミットされたデータを取得する
    pub fn data(&self) -> Option<T> {
        self.state.lock().unwrap().data.clone()
    }

    /// 現在のライフサイクル状態を取得する
    pub fn loading(&self) -> LoadingState {
        self.state.lock().unwrap().loading
    }

    /// 実行中かどうかを判定する
    pub fn is_loading(&self) -> bool {
        self.loading() == LoadingState::Loading
    }

    /// 最後に記録されたエラーを取得する
    pub fn error(&self) -> Option<ErrorState> {
        self.state.lock().unwrap().error.clone()
    }
}

impl<T: Clone> Default for AsyncOperation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AsyncOperation<T> {
    /// コントローラの破棄時に実行中の呼び出しをキャンセルする
    ///
    /// ビューの破棄後に結果がコミットされるのを防ぐ。
    fn drop(&mut self) {
        if let Some(token) = self.state.lock().unwrap().cancel_token.take() {
            token.cancel();
        }
    }
}
