use std::cell::{
    Ref,
    RefCell
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::managererror::{
    ManagerError,
    parse_json_value
};

/// 每個 JSON 物件都必須帶 `name`，作為 registry 的 key
#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>>;

    fn insert(&self, name: String, value: V);

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// 接受單一物件或物件陣列
    fn from_json_reader<R: Read>(&self, reader: R) -> Result<(), ManagerError> where
        Self: Sized {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }

    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> where
        Self: Sized {
        let file = File::open(file_path)?;
        self.from_json_reader(BufReader::new(file))
    }
}


pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json }
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>> {
        self.map_cell.borrow()
    }

    fn insert(&self, name: String, value: V) {
        debug!("registering '{}'", name);
        self.map_cell.borrow_mut().insert(name, value);
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        self.insert(named_object.name, v);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct ScaleJsonProp {
        factor: f64
    }

    fn scale_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        let prop: ScaleJsonProp = parse_json_value(json_value)?;
        Ok(prop.factor)
    }

    #[test]
    fn inserts_named_objects_from_array() {
        let manager = Manager::new(scale_from_json);
        let json = json!([
            { "name": "double", "factor": 2.0 },
            { "name": "half", "factor": 0.5 }
        ]);

        manager.from_json_reader(json.to_string().as_bytes()).unwrap();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get("double").unwrap(), 2.0);
        assert_eq!(manager.names(), vec!["double".to_owned(), "half".to_owned()]);
    }

    #[test]
    fn single_object_is_accepted() {
        let manager = Manager::new(scale_from_json);
        manager.from_json_reader(r#"{ "name": "unit", "factor": 1.0 }"#.as_bytes()).unwrap();

        assert!(manager.contains("unit"));
    }

    #[test]
    fn missing_name_is_reported() {
        let manager = Manager::new(scale_from_json);

        match manager.get("missing") {
            Err(ManagerError::NameNotFoundError(name)) => assert_eq!(name, "missing"),
            other => panic!("expected NameNotFoundError, got {:?}", other),
        }
    }

    #[test]
    fn object_without_name_is_a_parse_error() {
        let manager = Manager::new(scale_from_json);
        let result = manager.from_json_reader(r#"{ "factor": 1.0 }"#.as_bytes());

        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
        assert!(manager.is_empty());
    }
}
