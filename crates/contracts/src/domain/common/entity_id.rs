use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Идентификатор записи справочника
///
/// REST-слой отдаёт id то числом, то строкой, поэтому сравнение идёт
/// по нормализованной строке: `5`, `5.0`, `"5"` и `" 5 "` равны.
/// Пустой id означает «ничего не выбрано».
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` для пустого id, чтобы выбор можно было проверять через `?`
    pub fn non_empty(&self) -> Option<&Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    Self(format!("{}", f as i64))
                }
                _ => Self(n.to_string()),
            },
            _ => Self::default(),
        }
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Десериализация необязательной ссылки: `null`, `""` и мусор дают `None`
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = EntityId::from_json(&value);
    Ok(if id.is_empty() { None } else { Some(id) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_are_equal() {
        let from_int: EntityId = serde_json::from_str("5").unwrap();
        let from_float: EntityId = serde_json::from_str("5.0").unwrap();
        let from_str: EntityId = serde_json::from_str("\" 5 \"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_float, from_str);
        assert_eq!(from_int.as_str(), "5");
    }

    #[test]
    fn test_null_id_is_empty() {
        let id: EntityId = serde_json::from_str("null").unwrap();
        assert!(id.is_empty());
        assert!(id.non_empty().is_none());
    }

    #[test]
    fn test_uuid_like_ids_survive() {
        let id: EntityId =
            serde_json::from_str("\"0f8fad5b-d9cb-469f-a165-70867728950e\"").unwrap();
        assert_eq!(id.to_string(), "0f8fad5b-d9cb-469f-a165-70867728950e");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0f8fad5b-d9cb-469f-a165-70867728950e\"");
    }
}
