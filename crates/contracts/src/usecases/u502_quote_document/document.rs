//! Коммерческое предложение для печати
//!
//! Строится из уже посчитанного `QuoteResult`, цены повторно не ищет.

use crate::domain::common::resolve_name;
use crate::shared::catalog::Catalog;
use crate::shared::format::format_ils;
use crate::usecases::u501_calculate_quote::request::{CompanySettings, CustomerInfo, Selection};
use crate::usecases::u501_calculate_quote::response::QuoteResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    pub label: String,
    pub detail: Option<String>,
    pub amount: f64,
    /// "1,416 ₪"
    pub amount_display: String,
}

impl QuoteLine {
    fn new(label: impl Into<String>, detail: Option<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            detail,
            amount,
            amount_display: format_ils(amount),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteDocument {
    pub quote_number: Uuid,
    pub issued_at: DateTime<Utc>,
    pub company_name: Option<String>,
    pub customer: CustomerInfo,
    pub shower_type: Option<String>,
    pub model: Option<String>,
    /// "2 × 1 m" или "2 × 1 + 0.5 m" для угловой кабины
    pub dimensions: String,
    pub area_m2: f64,
    /// Позиции с найденной ценой
    pub lines: Vec<QuoteLine>,
    /// Subtotal, VAT, Profit, Total
    pub totals: Vec<QuoteLine>,
    pub total: f64,
    pub total_display: String,
    pub requires_custom_quote: bool,
    pub warnings: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl QuoteDocument {
    pub fn build(
        selection: &Selection,
        catalog: &Catalog,
        settings: &CompanySettings,
        result: &QuoteResult,
        quote_number: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let b = &result.breakdown;
        let debug = &result.debug;
        let shower_type = catalog.shower_type(selection.shower_type_id.as_ref());
        let is_corner = shower_type.map(|t| t.is_corner()).unwrap_or(false);

        let mut lines = Vec::new();

        if debug.glass.matched {
            let detail = format!(
                "{} {} mm, {} m²",
                debug.glass.glass_type_name.as_deref().unwrap_or(""),
                debug.glass.thickness_mm.unwrap_or(0.0),
                round2(b.area)
            );
            lines.push(QuoteLine::new("Glass", Some(detail), debug.glass.price));
        }

        if debug.hardware.matched {
            let detail = format!(
                "{} / {} × {}",
                debug.hardware.hardware_type_name,
                debug.hardware.finish_name.as_deref().unwrap_or(""),
                debug.hardware.quantity
            );
            lines.push(QuoteLine::new("Hardware", Some(detail), debug.hardware.price));
        }

        for seal in debug.seals.iter().filter(|s| s.matched) {
            let name = resolve_name(&catalog.seal_types, Some(&seal.seal_type_id))
                .map(str::to_string);
            lines.push(QuoteLine::new("Seal", name, seal.price));
        }

        for add_on in debug.add_ons.iter().filter(|a| a.matched) {
            let detail = format!("{} × {}", add_on.name, add_on.quantity);
            lines.push(QuoteLine::new("Add-on", Some(detail), add_on.price));
        }

        let totals = vec![
            QuoteLine::new("Subtotal", None, b.subtotal),
            QuoteLine::new("VAT", Some(format!("{}%", round2(b.vat_rate * 100.0))), b.vat),
            QuoteLine::new("Profit", Some(format!("{}%", b.profit_margin_percent)), b.profit),
            QuoteLine::new("Total", None, b.total),
        ];

        let dimensions = if is_corner {
            format!("{} × {} + {} m", selection.height, selection.width, selection.length)
        } else {
            format!("{} × {} m", selection.height, selection.width)
        };

        Self {
            quote_number,
            issued_at,
            company_name: settings.company_name.clone(),
            customer: selection.customer.clone(),
            shower_type: shower_type.map(|t| t.name.clone()),
            model: resolve_name(&catalog.models, selection.model_id.as_ref()).map(str::to_string),
            dimensions,
            area_m2: round2(b.area),
            lines,
            totals,
            total: b.total,
            total_display: format_ils(b.total),
            requires_custom_quote: result.requires_custom_quote,
            warnings: result.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}
