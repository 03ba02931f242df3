use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::{NodeError, Result};

/// Разрешённые параметры ноды: по одному объекту на входной элемент
#[derive(Debug, Default, Clone)]
pub struct NodeParameters {
    items: Vec<Map<String, Value>>,
}

impl NodeParameters {
    #[allow(dead_code)]
    pub fn new(items: Vec<Map<String, Value>>) -> Self {
        Self { items }
    }

    /// Параметры единственного элемента
    pub fn single(item: Map<String, Value>) -> Self {
        Self { items: vec![item] }
    }

    fn item(&self, index: usize) -> Result<&Map<String, Value>> {
        self.items.get(index).ok_or(NodeError::MissingItem(index))
    }

    /// Обязательный параметр элемента index
    pub fn get<T: DeserializeOwned>(&self, name: &str, index: usize) -> Result<T> {
        let value = self
            .item(index)?
            .get(name)
            .ok_or_else(|| NodeError::MissingParameter(name.to_string()))?;

        Ok(serde_json::from_value(value.clone())?)
    }

    /// Необязательный параметр: при отсутствии возвращает значение по умолчанию
    pub fn get_or_default<T>(&self, name: &str, index: usize) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.item(index)?.get(name) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(T::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_params() -> NodeParameters {
        NodeParameters::single(
            json!({
                "chat_id": "42",
                "additionalFields": { "disable_notification": true }
            })
            .as_object()
            .cloned()
            .unwrap(),
        )
    }

    #[test]
    fn get_returns_typed_value() {
        let chat_id: String = sample_params().get("chat_id", 0).unwrap();
        assert_eq!(chat_id, "42");
    }

    #[test]
    fn get_missing_parameter_fails() {
        let error = sample_params().get::<String>("unknown", 0).unwrap_err();
        assert!(matches!(error, NodeError::MissingParameter(name) if name == "unknown"));
    }

    #[test]
    fn get_missing_item_fails() {
        let error = sample_params().get::<String>("chat_id", 5).unwrap_err();
        assert!(matches!(error, NodeError::MissingItem(5)));
    }

    #[test]
    fn get_or_default_falls_back() {
        let value: Map<String, Value> = sample_params().get_or_default("missing", 0).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn get_wrong_type_fails() {
        let error = sample_params().get::<u64>("chat_id", 0).unwrap_err();
        assert!(matches!(error, NodeError::Parse(_)));
    }
}
