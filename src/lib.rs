//! 旅行経費トラッカーのRESTクライアント
//!
//! バックエンドAPIに対するトランスポートクライアント、リソース別の
//! ドメインサービス、サービス合成ルート、およびキャンセル対応の
//! 非同期取得コントローラとビューモデルを提供する。

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use errors::{AppError, AppResult, ErrorState};
