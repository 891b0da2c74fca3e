//! Мягкое чтение чисел из REST-ответов
//!
//! Цены, толщины и размеры приходят то числом, то строкой ("45.00", "5309,00"),
//! иногда `null`. Всё, что не удалось разобрать, превращается в 0 и никогда
//! не становится ошибкой десериализации или NaN в итогах.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Разбор строки в духе `parseFloat`: берётся самый длинный числовой префикс
///
/// Одиночная запятая без точки считается десятичным разделителем.
/// Префикс ищется за один проход, `parse` вызывается один раз.
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let end = numeric_prefix_len(normalized.as_bytes());
    if end == 0 {
        return None;
    }
    normalized[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Длина префикса вида `[+-]digits[.digits][e[+-]digits]`, 0 если цифр нет
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

/// Число из произвольного JSON-значения, `None` если числа там нет
pub fn coerce_optional_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_float(s),
        _ => None,
    }
}

/// Число из произвольного JSON-значения с откатом в 0
pub fn coerce_f64(value: &Value) -> f64 {
    coerce_optional_f64(value).unwrap_or(0.0)
}

/// Неотрицательное число (деньги, площадь, размеры)
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Количество штук: дробная часть отбрасывается, отрицательное даёт 0
pub fn coerce_quantity(value: &Value) -> u32 {
    let number = non_negative(coerce_f64(value)).trunc();
    if number >= u32::MAX as f64 {
        u32::MAX
    } else {
        number as u32
    }
}

fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

// ============================================================================
// serde helpers (`#[serde(deserialize_with = "...")]`)
// ============================================================================

/// Неотрицательное число, мусор даёт 0
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_negative(coerce_f64(&value)))
}

/// Необязательное число: `null` и мусор дают `None`
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_optional_f64(&value))
}

/// Необязательное количество: `None`, если значение не задано или не число
pub fn optional_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_optional_f64(&value).map(|_| coerce_quantity(&value)))
}

/// Текст: `null` и объекты дают пустую строку, числа и bool превращаются в строку
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value))
}

/// Необязательный текст: `None` для `null` и пустой строки
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = coerce_text(&value);
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Флаг: принимает bool, 0/1 и строки "true"/"1"
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_flag(&value))
}

/// Словарь "название → количество" с мягким разбором количеств
pub fn quantity_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let map = match value {
        Value::Object(entries) => entries
            .into_iter()
            .map(|(name, qty)| (name, coerce_quantity(&qty)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(map)
}
