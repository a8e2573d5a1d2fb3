use log::{error, info};
use std::str::FromStr;
use std::sync::Arc;
use tabi_keihi::config::{self, ApiConfig};
use tabi_keihi::errors::ErrorState;
use tabi_keihi::models::{
    CreateExpenseRequest, CreateTripRequest, ExpenseType, PaymentMethod, Report, ReportKind,
};
use tabi_keihi::services::ServiceContainer;
use tabi_keihi::utils::formatters::{format_currency, format_date, format_date_range};
use tabi_keihi::views::{DashboardView, TripDetailsView, TripsView};

#[tokio::main]
async fn main() {
    // ログシステムを初期化
    config::initialize_logging_system();

    // 環境変数を読み込み（.envファイルがある場合）
    config::load_environment_variables();

    // API設定を読み込み（必須変数が欠けている場合はここで停止する）
    let api_config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("API設定の読み込みに失敗しました: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    info!("{} を起動します", api_config.app_name);

    // サービス一式をここで一度だけ構築し、各ビューへ明示的に渡す
    let services = match ServiceContainer::new(&api_config) {
        Ok(container) => Arc::new(container),
        Err(e) => {
            error!("サービスの構築に失敗しました: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    let exit_code = run_command(&arg_refs, services).await;
    std::process::exit(exit_code);
}

/// サブコマンドを実行する
///
/// # 戻り値
/// プロセスの終了コード
async fn run_command(args: &[&str], services: Arc<ServiceContainer>) -> i32 {
    match args {
        [] | ["dashboard"] => show_dashboard(services).await,
        ["trips"] => show_trips(services).await,
        ["trip", trip_id] => show_trip_details(services, trip_id).await,
        ["report", kind, trip_id] => show_report(services, kind, trip_id).await,
        ["create-trip", start, end, international, budget, currency] => {
            create_trip(services, start, end, international, budget, currency).await
        }
        ["add-expense", trip_id, date, amount, method, expense_type] => {
            add_expense(services, trip_id, date, amount, method, expense_type).await
        }
        _ => {
            print_usage();
            2
        }
    }
}

fn print_usage() {
    eprintln!("使い方: tabi-keihi <コマンド>");
    eprintln!();
    eprintln!("コマンド:");
    eprintln!("  dashboard                                            ダッシュボードを表示（デフォルト）");
    eprintln!("  trips                                                旅行一覧を表示");
    eprintln!("  trip <旅行ID>                                        旅行の詳細と経費を表示");
    eprintln!("  report <daily|type|summary> <旅行ID>                 レポートを表示");
    eprintln!("  create-trip <開始日> <終了日> <海外:true|false> <1日予算> <通貨>");
    eprintln!("  add-expense <旅行ID> <日付> <金額> <Cash|Card> <カテゴリ>");
}

/// エラーを表示し、再試行の手がかりを示す
fn print_error(error: &ErrorState) {
    eprintln!("エラー: {}", error.message);
    if let Some(code) = &error.code {
        eprintln!("  ステータス: {code}");
    }
    eprintln!("  同じコマンドを再実行すると再試行できます");
}

async fn show_dashboard(services: Arc<ServiceContainer>) -> i32 {
    let view = DashboardView::new(services);
    view.load().await;

    let state = view.state();
    if let Some(error) = &state.error {
        print_error(error);
        return 1;
    }

    if let Some(stats) = &state.stats {
        println!("=== ダッシュボード ===");
        println!("旅行数:         {}", stats.total_trips);
        println!("アクティブ:     {}", stats.active_trips);
        println!(
            "総支出:         {}",
            format_currency(stats.total_expenses, "COP")
        );
        println!(
            "1日平均支出:    {}",
            format_currency(stats.avg_daily_expense, "COP")
        );
    }

    println!();
    println!("アクティブな旅行: {}件", state.active_trips.len());
    for trip in &state.active_trips {
        println!(
            "  {}  {}  予算 {}/日",
            trip.trip_id,
            format_date_range(&trip.start_date, &trip.end_date),
            format_currency(trip.daily_budget, &trip.currency)
        );
    }

    0
}

async fn show_trips(services: Arc<ServiceContainer>) -> i32 {
    let view = TripsView::new(services);
    view.load().await;

    let state = view.state();
    if let Some(error) = &state.error {
        print_error(error);
        return 1;
    }

    println!("=== 旅行一覧 ({}件) ===", state.trips.len());
    for trip in &state.trips {
        let status = if trip.is_active { "進行中" } else { "終了" };
        println!(
            "  {}  {}  [{}]  予算 {}/日",
            trip.trip_id,
            format_date_range(&trip.start_date, &trip.end_date),
            status,
            format_currency(trip.daily_budget, &trip.currency)
        );
    }

    0
}

async fn show_trip_details(services: Arc<ServiceContainer>, trip_id: &str) -> i32 {
    let view = TripDetailsView::new(services);
    view.load(trip_id).await;

    let state = view.state();
    if let Some(error) = &state.error {
        print_error(error);
        // 片方の取得が成功していれば表示は続ける
        if state.trip.is_none() && state.expenses.is_empty() {
            return 1;
        }
    }

    if let Some(trip) = &state.trip {
        println!("=== 旅行 {} ===", trip.trip_id);
        println!("期間:   {}", format_date_range(&trip.start_date, &trip.end_date));
        println!("予算:   {}/日", format_currency(trip.daily_budget, &trip.currency));
        println!("海外:   {}", if trip.is_international { "はい" } else { "いいえ" });
    }

    println!();
    println!("経費: {}件", state.expenses.len());
    for expense in &state.expenses {
        println!(
            "  {}  {}  {}  {} ({})",
            format_date(&expense.expense_date),
            expense.expense_type,
            expense.payment_method,
            format_currency(expense.amount, &expense.currency),
            format_currency(expense.converted_amount, "COP")
        );
    }

    0
}

async fn show_report(services: Arc<ServiceContainer>, kind: &str, trip_id: &str) -> i32 {
    let kind = match ReportKind::from_str(kind) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return 2;
        }
    };

    match services.report_service().get_report(kind, trip_id).await {
        Ok(response) => {
            match response.data {
                Report::Daily(report) => {
                    println!("=== 日別レポート ({trip_id}) ===");
                    for (date, breakdown) in &report {
                        println!(
                            "  {}  現金 {:>12}  カード {:>12}  合計 {:>12}",
                            format_date(date),
                            format_currency(breakdown.cash, "COP"),
                            format_currency(breakdown.card, "COP"),
                            format_currency(breakdown.total, "COP")
                        );
                    }
                }
                Report::Type(report) => {
                    println!("=== カテゴリ別レポート ({trip_id}) ===");
                    for (category, breakdown) in &report {
                        println!(
                            "  {:<16}  現金 {:>12}  カード {:>12}  合計 {:>12}",
                            category,
                            format_currency(breakdown.cash, "COP"),
                            format_currency(breakdown.card, "COP"),
                            format_currency(breakdown.total, "COP")
                        );
                    }
                }
                Report::Summary(summary) => {
                    println!("=== サマリー ({trip_id}) ===");
                    println!("総予算:       {}", format_currency(summary.total_budget, "COP"));
                    println!("総支出:       {}", format_currency(summary.total_expenses, "COP"));
                    println!("残予算:       {}", format_currency(summary.remaining_budget, "COP"));
                    println!("旅行日数:     {}日", summary.trip_days);
                    println!(
                        "1日平均支出:  {}",
                        format_currency(summary.average_daily_expense, "COP")
                    );
                }
            }
            0
        }
        Err(e) => {
            print_error(&ErrorState::from(&e));
            1
        }
    }
}

async fn create_trip(
    services: Arc<ServiceContainer>,
    start: &str,
    end: &str,
    international: &str,
    budget: &str,
    currency: &str,
) -> i32 {
    let is_international = match international {
        "true" => true,
        "false" => false,
        _ => {
            eprintln!("海外フラグは true または false を指定してください");
            return 2;
        }
    };

    let daily_budget: f64 = match budget.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("1日の予算は数値で指定してください");
            return 2;
        }
    };

    let request = CreateTripRequest {
        start_date: start.to_string(),
        end_date: end.to_string(),
        is_international,
        daily_budget,
        currency: currency.to_string(),
    };

    // 送信前のクライアント側バリデーション
    if let Err(e) = request.validate() {
        eprintln!("{}", e.user_message());
        return 2;
    }

    match services.trip_service().create_trip(&request).await {
        Ok(response) => {
            println!("旅行を作成しました: {}", response.data.trip_id);
            0
        }
        Err(e) => {
            print_error(&ErrorState::from(&e));
            1
        }
    }
}

async fn add_expense(
    services: Arc<ServiceContainer>,
    trip_id: &str,
    date: &str,
    amount: &str,
    method: &str,
    expense_type: &str,
) -> i32 {
    let amount: f64 = match amount.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("金額は数値で指定してください");
            return 2;
        }
    };

    let payment_method = match PaymentMethod::from_str(method) {
        Ok(method) => method,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return 2;
        }
    };

    let expense_type = match ExpenseType::from_str(expense_type) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return 2;
        }
    };

    let request = CreateExpenseRequest {
        trip_id: trip_id.to_string(),
        expense_date: date.to_string(),
        amount,
        payment_method,
        expense_type,
    };

    // 送信前のクライアント側バリデーション
    if let Err(e) = request.validate() {
        eprintln!("{}", e.user_message());
        return 2;
    }

    match services.expense_service().add_expense(&request).await {
        Ok(response) => {
            println!(
                "経費を登録しました: {} ({})",
                response.data.expense_id,
                format_currency(response.data.amount, &response.data.currency)
            );
            0
        }
        Err(e) => {
            print_error(&ErrorState::from(&e));
            1
        }
    }
}
