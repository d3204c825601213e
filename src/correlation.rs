//! Name-based correlation between the extracted models.
//!
//! There is no symbol resolution: a record, a container's declared value type
//! and an accessor's declared return type belong to the same correlation group
//! exactly when their type names are equal strings. Two unrelated types that
//! happen to share a name are therefore correlated too. All joins live here so
//! a real symbol table can replace this module without touching detectors.

use crate::core::{GetterSignature, InputSchema, MapKeyStructure, SourceModels};

pub struct CorrelationIndex<'a> {
    models: &'a SourceModels,
}

/// A schema together with every container declared to hold it.
pub struct SchemaGroup<'a> {
    pub schema: &'a InputSchema,
    pub containers: &'a [MapKeyStructure],
}

/// Accessors and containers sharing one declared type name.
pub struct AccessorGroup<'a> {
    pub type_name: &'a str,
    pub getters: &'a [GetterSignature],
    pub containers: &'a [MapKeyStructure],
}

fn containers_in<'m>(models: &'m SourceModels, type_name: &str) -> &'m [MapKeyStructure] {
    models
        .map_structures
        .get(type_name)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

impl<'a> CorrelationIndex<'a> {
    pub fn new(models: &'a SourceModels) -> Self {
        Self { models }
    }

    /// Schemas that have at least one container, in schema-name order.
    pub fn schema_groups(&self) -> impl Iterator<Item = SchemaGroup<'a>> {
        let models = self.models;
        models.schemas.values().filter_map(move |schema| {
            let containers = containers_in(models, &schema.file_name);
            (!containers.is_empty()).then_some(SchemaGroup { schema, containers })
        })
    }

    /// Return types present in both the accessor and container models.
    pub fn accessor_groups(&self) -> impl Iterator<Item = AccessorGroup<'a>> {
        let models = self.models;
        models.getters.iter().filter_map(move |(type_name, getters)| {
            let containers = containers_in(models, type_name);
            (!containers.is_empty()).then_some(AccessorGroup {
                type_name: type_name.as_str(),
                getters: getters.as_slice(),
                containers,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn schema(name: &str) -> InputSchema {
        InputSchema {
            file_name: name.to_string(),
            file_path: PathBuf::from(format!("row/{name}.java")),
            natural_key_columns: vec!["storeId".to_string()],
            value_columns: vec![],
            granularity_level: "Store Level".to_string(),
        }
    }

    fn container(variable: &str) -> MapKeyStructure {
        MapKeyStructure {
            variable_name: variable.to_string(),
            file_path: PathBuf::from("data/StoreData.java"),
            line_number: 1,
            key_components: vec!["storeId".to_string()],
            class_name: "StoreData".to_string(),
        }
    }

    fn getter(return_type: &str) -> GetterSignature {
        GetterSignature {
            method_name: format!("get{return_type}"),
            file_path: PathBuf::from("data/StoreData.java"),
            line_number: 5,
            parameters: vec![],
            return_type: return_type.to_string(),
        }
    }

    #[test]
    fn schema_groups_join_on_exact_name() {
        let mut models = SourceModels::default();
        models.schemas.insert("StoreRow".into(), schema("StoreRow"));
        models.schemas.insert("SkuRow".into(), schema("SkuRow"));
        models
            .map_structures
            .insert("StoreRow".into(), vec![container("stores"), container("byStore")]);
        models
            .map_structures
            .insert("storerow".into(), vec![container("ignored")]);

        let index = CorrelationIndex::new(&models);
        let groups: Vec<_> = index.schema_groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].schema.file_name, "StoreRow");
        let variables: Vec<_> = groups[0]
            .containers
            .iter()
            .map(|c| c.variable_name.as_str())
            .collect();
        assert_eq!(variables, vec!["stores", "byStore"]);
    }

    #[test]
    fn accessor_groups_need_both_sides() {
        let mut models = SourceModels::default();
        models.getters.insert("StoreRow".into(), vec![getter("StoreRow")]);
        models.getters.insert("int".into(), vec![getter("int")]);
        models
            .map_structures
            .insert("StoreRow".into(), vec![container("stores")]);

        let index = CorrelationIndex::new(&models);
        let groups: Vec<_> = index.accessor_groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].type_name, "StoreRow");
        assert_eq!(groups[0].getters.len(), 1);
        assert_eq!(groups[0].containers.len(), 1);
    }
}
