use chrono::{DateTime, Datelike, NaiveDate};

/// スペイン語の月略称（es-CO表記に合わせる）
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// 金額を通貨表示用にフォーマットする
///
/// コロンビア式の桁区切り（千区切りはピリオド、小数はカンマ）を使い、
/// 端数がない場合は小数部を表示しない。
///
/// # 引数
/// * `amount` - 金額
/// * `currency` - 通貨コード
///
/// # 戻り値
/// フォーマット済みの金額文字列（例: "$ 1.234,50 USD"）
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    // 小数2桁へ丸めた上で整数部と小数部に分ける
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_thousands(whole);
    let sign = if negative { "-" } else { "" };

    if fraction == 0 {
        format!("{sign}$ {grouped} {currency}")
    } else {
        format!("{sign}$ {grouped},{fraction:02} {currency}")
    }
}

/// 整数を千区切り（ピリオド）でフォーマットする
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// 日付を表示用にフォーマットする
///
/// # 引数
/// * `date` - YYYY-MM-DD形式またはRFC 3339形式の日付文字列
///
/// # 戻り値
/// 「日 月略称 年」形式の文字列（例: "1 mar 2024"）。
/// 解析できない場合は入力をそのまま返す。
pub fn format_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(d) => {
            let month = MONTH_ABBREVIATIONS[(d.month() - 1) as usize];
            format!("{} {} {}", d.day(), month, d.year())
        }
        None => date.to_string(),
    }
}

/// 日付範囲を表示用にフォーマットする
///
/// # 戻り値
/// 「開始 - 終了」形式の文字列
pub fn format_date_range(start_date: &str, end_date: &str) -> String {
    format!("{} - {}", format_date(start_date), format_date(end_date))
}

/// 2つの日付の間の日数を計算する
///
/// # 戻り値
/// 日数の絶対値。どちらかの日付が解析できない場合は0
pub fn calculate_days_between(start_date: &str, end_date: &str) -> i64 {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d");
    let end = NaiveDate::parse_from_str(end_date, "%Y-%m-%d");

    match (start, end) {
        (Ok(s), Ok(e)) => e.signed_duration_since(s).num_days().abs(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_whole_amount() {
        // 端数がない場合は小数部を表示しない
        assert_eq!(format_currency(1234567.0, "COP"), "$ 1.234.567 COP");
        assert_eq!(format_currency(0.0, "COP"), "$ 0 COP");
    }

    #[test]
    fn test_format_currency_with_fraction() {
        assert_eq!(format_currency(1234.5, "USD"), "$ 1.234,50 USD");
        assert_eq!(format_currency(0.05, "USD"), "$ 0,05 USD");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1500.0, "COP"), "-$ 1.500 COP");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-01"), "1 mar 2024");
        assert_eq!(format_date("2024-12-25"), "25 dic 2024");
    }

    #[test]
    fn test_format_date_accepts_rfc3339() {
        assert_eq!(format_date("2024-03-01T00:00:00.000Z"), "1 mar 2024");
    }

    #[test]
    fn test_format_date_falls_back_to_input() {
        // 解析できない入力はそのまま返す
        assert_eq!(format_date("no es una fecha"), "no es una fecha");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range("2024-03-01", "2024-03-05"),
            "1 mar 2024 - 5 mar 2024"
        );
    }

    #[test]
    fn test_calculate_days_between() {
        assert_eq!(calculate_days_between("2024-03-01", "2024-03-05"), 4);
        // 順序が逆でも絶対値を返す
        assert_eq!(calculate_days_between("2024-03-05", "2024-03-01"), 4);
        assert_eq!(calculate_days_between("2024-03-01", "2024-03-01"), 0);
        // 解析できない場合は0
        assert_eq!(calculate_days_between("mañana", "2024-03-01"), 0);
    }
}
