use super::EntityId;

/// Трейт для записи справочника каталога
///
/// Справочники приходят из REST-слоя готовыми массивами и в рамках
/// сессии расчёта только читаются.
pub trait CatalogEntity {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &EntityId;

    /// Отображаемое название
    fn name(&self) -> &str;

    // ============================================================================
    // Метаданные справочника
    // ============================================================================

    /// Индекс справочника в системе (например, "a001")
    fn catalog_index() -> &'static str;

    /// Имя коллекции в REST API (например, "shower_types")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Полное имя вида "a001_shower_type"
    fn full_name() -> String {
        format!("{}_{}", Self::catalog_index(), Self::collection_name())
    }
}

/// Найти запись по id; пустой id ничего не находит
pub fn find_by_id<'a, T: CatalogEntity>(items: &'a [T], id: &EntityId) -> Option<&'a T> {
    if id.is_empty() {
        return None;
    }
    items.iter().find(|item| item.id() == id)
}

/// Найти название записи по необязательному id
pub fn resolve_name<'a, T: CatalogEntity>(items: &'a [T], id: Option<&EntityId>) -> Option<&'a str> {
    id.and_then(|id| find_by_id(items, id)).map(|item| item.name())
}
