use super::matching::pick_row;
use super::response::GlassMatch;
use crate::domain::common::{resolve_name, EntityId};
use crate::projections::p901_glass_prices::dto::GlassPriceDto;
use crate::shared::catalog::Catalog;
use crate::shared::lenient::non_negative;

/// Цена стекла: строка прайса по (название типа, толщина) × площадь
///
/// Название сравнивается точно, с учётом регистра. Нет строки, значит цена 0.
pub fn match_glass_price(
    glass_type_id: Option<&EntityId>,
    glass_thickness_id: Option<&EntityId>,
    area: f64,
    catalog: &Catalog,
    prices: &[GlassPriceDto],
) -> GlassMatch {
    let glass_type_name = resolve_name(&catalog.glass_types, glass_type_id).map(str::to_string);
    let thickness_mm = catalog
        .glass_thickness(glass_thickness_id)
        .map(|t| t.thickness_mm);

    let search_key = if glass_type_id.is_none() && glass_thickness_id.is_none() {
        String::new()
    } else {
        format!(
            "{} / {} mm",
            glass_type_name.as_deref().unwrap_or("?"),
            thickness_mm.map(|mm| mm.to_string()).unwrap_or_else(|| "?".to_string())
        )
    };

    let row = match (glass_type_name.as_deref(), thickness_mm) {
        (Some(name), Some(mm)) => pick_row(
            prices.iter().filter(|p| p.matches(name, mm)),
            |p: &GlassPriceDto| p.price_per_m2,
            |p: &GlassPriceDto| &p.id,
        ),
        _ => None,
    };

    match row {
        Some(row) => {
            let price_per_m2 = non_negative(row.price_per_m2);
            let area = non_negative(area);
            let price = price_per_m2 * area;
            GlassMatch {
                matched: true,
                glass_type_name,
                thickness_mm,
                search_key,
                price_per_m2: Some(price_per_m2),
                price,
                calculation: Some(format!("{} × {} m² = {}", price_per_m2, area, price)),
            }
        }
        None => GlassMatch {
            matched: false,
            glass_type_name,
            thickness_mm,
            search_key,
            price_per_m2: None,
            price: 0.0,
            calculation: None,
        },
    }
}
