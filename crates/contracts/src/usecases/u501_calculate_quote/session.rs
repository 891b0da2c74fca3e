use super::aggregator::compute_quote;
use super::dimensions::{STANDARD_HEIGHT_M, STANDARD_WIDTH_M};
use super::request::{CompanySettings, Selection, SelectionChange};
use super::response::QuoteResult;
use crate::shared::catalog::{PricingTables, QuoteSnapshot};
use crate::shared::lenient::non_negative;

/// Сессия расчёта: снимок данных, выбор и последний результат
///
/// Любое изменение выбора сразу пересчитывает результат, поэтому
/// `result()` никогда не отстаёт от `selection()`.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    snapshot: QuoteSnapshot,
    settings: CompanySettings,
    selection: Selection,
    result: QuoteResult,
}

impl QuoteSession {
    pub fn new(snapshot: QuoteSnapshot, settings: CompanySettings) -> Self {
        let mut session = Self {
            snapshot,
            settings,
            selection: Selection::default(),
            result: QuoteResult::default(),
        };
        session.recompute();
        session
    }

    pub fn snapshot(&self) -> &QuoteSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn result(&self) -> &QuoteResult {
        &self.result
    }

    pub fn apply(&mut self, change: SelectionChange) -> &QuoteResult {
        self.apply_change(change);
        self.recompute();
        &self.result
    }

    pub fn replace_selection(&mut self, selection: Selection) -> &QuoteResult {
        self.selection = selection;
        self.recompute();
        &self.result
    }

    /// Обновить прайсы (например, после повторной загрузки), выбор сохраняется
    pub fn replace_pricing(&mut self, pricing: PricingTables) -> &QuoteResult {
        self.snapshot.pricing = pricing;
        self.recompute();
        &self.result
    }

    pub fn reset(&mut self) -> &QuoteResult {
        self.selection = Selection::default();
        self.recompute();
        &self.result
    }

    fn recompute(&mut self) {
        self.result = compute_quote(
            &self.selection,
            &self.snapshot.catalog,
            &self.snapshot.pricing,
            &self.settings,
        );
    }

    fn apply_change(&mut self, change: SelectionChange) {
        let s = &mut self.selection;
        match change {
            SelectionChange::ShowerType(id) => {
                let keep_model = match (&id, s.model_id.as_ref()) {
                    (Some(type_id), Some(_)) => self
                        .snapshot
                        .catalog
                        .model(s.model_id.as_ref())
                        .map(|m| m.belongs_to(type_id))
                        .unwrap_or(false),
                    _ => false,
                };
                if !keep_model {
                    s.model_id = None;
                }
                s.shower_type_id = id;
            }
            SelectionChange::Model(id) => s.model_id = id,
            SelectionChange::GlassType(id) => s.glass_type_id = id,
            SelectionChange::GlassThickness(id) => s.glass_thickness_id = id,
            SelectionChange::HardwareFinish(id) => s.hardware_finish_id = id,
            SelectionChange::HardwareType(id) => s.hardware_type_id = id,
            SelectionChange::SealType(id) => s.seal_type_id = id,
            SelectionChange::SealQuantity(q) => s.seal_quantity = q,
            SelectionChange::HardwareQuantity(q) => s.hardware_quantity = q,
            SelectionChange::Height(v) => s.height = non_negative(v),
            SelectionChange::Width(v) => s.width = non_negative(v),
            SelectionChange::Length(v) => s.length = non_negative(v),
            SelectionChange::AddOnQuantity { name, quantity } => {
                if quantity == 0 {
                    s.add_on_quantities.remove(&name);
                } else {
                    s.add_on_quantities.insert(name, quantity);
                }
            }
            SelectionChange::Customer(customer) => s.customer = customer,
            SelectionChange::ApplyStandardDimensions => {
                s.height = STANDARD_HEIGHT_M;
                s.width = STANDARD_WIDTH_M;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a101_shower_type::aggregate::ShowerType;
    use crate::domain::a102_shower_model::aggregate::ShowerModel;
    use crate::domain::a103_glass_type::aggregate::GlassType;
    use crate::domain::a104_glass_thickness::aggregate::GlassThickness;
    use crate::domain::common::EntityId;
    use crate::projections::p901_glass_prices::dto::GlassPriceDto;
    use crate::projections::p904_addon_prices::dto::AddOnPriceDto;
    use crate::shared::catalog::Catalog;

    fn session() -> QuoteSession {
        let catalog = Catalog {
            shower_types: vec![ShowerType::new(1, "Standard"), ShowerType::new(2, "Corner")],
            models: vec![ShowerModel::new(10, "Alpha", 1), ShowerModel::new(20, "Beta", 2)],
            glass_types: vec![GlassType::new(1, "Clear")],
            glass_thicknesses: vec![GlassThickness::new(1, 8.0)],
            ..Default::default()
        };
        let pricing = PricingTables {
            glass: vec![GlassPriceDto::new("Clear", 8.0, 100.0)],
            add_ons: vec![AddOnPriceDto::new("Towel Bar", 50.0)],
            ..Default::default()
        };
        QuoteSession::new(
            QuoteSnapshot::new(catalog, pricing),
            CompanySettings::with_profit_margin(0.0),
        )
    }

    #[test]
    fn test_new_session_is_zero() {
        let session = session();
        assert_eq!(session.result().breakdown.total, 0.0);
        assert_eq!(session.selection(), &Selection::default());
    }

    #[test]
    fn test_every_change_recomputes() {
        let mut session = session();
        session.apply(SelectionChange::ShowerType(Some(EntityId::from(1))));
        session.apply(SelectionChange::GlassType(Some(EntityId::from(1))));
        session.apply(SelectionChange::GlassThickness(Some(EntityId::from(1))));
        session.apply(SelectionChange::ApplyStandardDimensions);
        let glass = session.result().breakdown.glass_price;
        assert!((glass - 100.0 * 2.1 * 1.5).abs() < 1e-9);

        session.apply(SelectionChange::Height(-3.0));
        assert_eq!(session.selection().height, 0.0);
        assert_eq!(session.result().breakdown.glass_price, 0.0);
    }

    #[test]
    fn test_shower_type_change_clears_foreign_model() {
        let mut session = session();
        session.apply(SelectionChange::ShowerType(Some(EntityId::from(1))));
        session.apply(SelectionChange::Model(Some(EntityId::from(10))));
        session.apply(SelectionChange::ShowerType(Some(EntityId::from(1))));
        assert_eq!(session.selection().model_id, Some(EntityId::from(10)));
        session.apply(SelectionChange::ShowerType(Some(EntityId::from(2))));
        assert_eq!(session.selection().model_id, None);
    }

    #[test]
    fn test_add_on_quantity_zero_removes() {
        let mut session = session();
        let total = session
            .apply(SelectionChange::AddOnQuantity {
                name: "Towel Bar".to_string(),
                quantity: 2,
            })
            .breakdown
            .addons_price;
        assert_eq!(total, 100.0);
        session.apply(SelectionChange::AddOnQuantity {
            name: "Towel Bar".to_string(),
            quantity: 0,
        });
        assert!(session.selection().add_on_quantities.is_empty());
        assert_eq!(session.result().breakdown.addons_price, 0.0);
    }

    #[test]
    fn test_replace_pricing_keeps_selection() {
        let mut session = session();
        session.apply(SelectionChange::AddOnQuantity {
            name: "Towel Bar".to_string(),
            quantity: 1,
        });
        session.replace_pricing(PricingTables {
            add_ons: vec![AddOnPriceDto::new("Towel Bar", 75.0)],
            ..Default::default()
        });
        assert_eq!(session.result().breakdown.addons_price, 75.0);
        session.reset();
        assert_eq!(session.result().breakdown.total, 0.0);
        assert_eq!(session.snapshot().pricing.add_ons.len(), 1);
    }
}
