use super::add_ons::{match_add_ons, total_price};
use super::area::compute_area;
use super::dimensions::check_dimensions;
use super::glass::match_glass_price;
use super::hardware::{match_hardware_price, resolve_hardware_type_name};
use super::request::{CompanySettings, Selection};
use super::response::{MatchDebugInfo, QuoteBreakdown, QuoteResult};
use super::seals::match_seal_price;
use crate::domain::a101_shower_type::aggregate::ShowerType;
use crate::shared::catalog::{Catalog, PricingTables};
use crate::shared::lenient::non_negative;

/// НДС Израиля
pub const VAT_RATE: f64 = 0.18;

/// Ставка НДС для типа кабины
///
/// Поле `vat_rate` справочника хранится, но в расчёте не используется.
pub fn vat_rate_for(_shower_type: Option<&ShowerType>) -> f64 {
    VAT_RATE
}

/// Итоги: `subtotal → +НДС → +маржа`
///
/// Маржа начисляется на сумму с НДС.
pub fn compute_totals(
    area: f64,
    glass_price: f64,
    hardware_price: f64,
    seals_price: f64,
    addons_price: f64,
    vat_rate: f64,
    profit_margin_percent: f64,
) -> QuoteBreakdown {
    let subtotal = glass_price + hardware_price + seals_price + addons_price;
    let vat = subtotal * vat_rate;
    let profit = (subtotal + vat) * profit_margin_percent / 100.0;
    QuoteBreakdown {
        area,
        glass_price,
        hardware_price,
        seals_price,
        addons_price,
        subtotal,
        vat,
        profit,
        total: subtotal + vat + profit,
        vat_rate,
        profit_margin_percent,
    }
}

/// Полный расчёт по выбору пользователя
///
/// Чистая функция: одинаковый вход даёт побитово одинаковый результат.
/// Отсутствующие цены дают 0 и попадают в `debug`, расчёт не падает.
pub fn compute_quote(
    selection: &Selection,
    catalog: &Catalog,
    pricing: &PricingTables,
    settings: &CompanySettings,
) -> QuoteResult {
    let shower_type = catalog.shower_type(selection.shower_type_id.as_ref());
    let shower_type_name = shower_type.map(|t| t.name.as_str()).unwrap_or("");
    let is_corner = shower_type.map(|t| t.is_corner()).unwrap_or(false);

    let area = compute_area(
        shower_type_name,
        selection.height,
        selection.width,
        selection.length,
    );

    let glass = match_glass_price(
        selection.glass_type_id.as_ref(),
        selection.glass_thickness_id.as_ref(),
        area,
        catalog,
        &pricing.glass,
    );

    let hardware_type_name = resolve_hardware_type_name(selection.hardware_type_id.as_ref(), catalog);
    let hardware = match_hardware_price(
        selection.hardware_finish_id.as_ref(),
        &hardware_type_name,
        selection.hardware_quantity,
        catalog,
        &pricing.hardware,
    );

    let seals = match_seal_price(selection.seal_type_id.as_ref(), &pricing.seals);
    let add_ons = match_add_ons(&selection.add_on_quantities, &pricing.add_ons);

    let breakdown = compute_totals(
        area,
        non_negative(glass.price),
        non_negative(hardware.price),
        seals.iter().map(|s| s.price).sum(),
        total_price(&add_ons),
        vat_rate_for(shower_type),
        settings.effective_profit_margin_percent(),
    );

    QuoteResult {
        breakdown,
        warnings: check_dimensions(selection.height, selection.width, selection.length, is_corner),
        requires_custom_quote: shower_type.map(|t| t.needs_custom_quote).unwrap_or(false),
        debug: MatchDebugInfo {
            glass,
            hardware,
            seals,
            add_ons,
        },
    }
}
