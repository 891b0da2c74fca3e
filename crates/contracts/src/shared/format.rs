//! Форматирование сумм для отображения (he-IL, шекели без копеек)

/// Знак валюты ILS
pub const ILS_SYMBOL: &str = "₪";

/// Форматирует целое число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(-1416), "-1,416");
/// ```
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Сумма в шекелях без дробной части: `1,416 ₪`
///
/// Округление половины от нуля; между числом и знаком неразрывный пробел.
pub fn format_ils(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let whole = if rounded == 0.0 { 0 } else { rounded as i64 };
    format!("{}\u{a0}{}", format_thousands(whole), ILS_SYMBOL)
}
