use std::cmp;
use std::collections::HashMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{next_version_value, Persistent, Repository};
use crate::utils::ddb::{from_ddb, is_conditional_failure, parse_item, parse_value, to_ddb_page};

// DDBRepository stores one entity type in its own table keyed by the entity id.
#[derive(Debug)]
pub struct DDBRepository<E> {
    client: Client,
    table_name: String,
    key_name: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Persistent> DDBRepository<E> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            table_name: E::table_name().to_string(),
            key_name: E::key_name().to_string(),
            _entity: PhantomData,
        }
    }
}

pub(crate) fn parse_entity<E: DeserializeOwned>(map: &HashMap<String, AttributeValue>) -> LibraryResult<E> {
    serde_json::from_value(parse_value(map)).map_err(LibraryError::from)
}

// Builds "#k0 = :v0 AND #k1 = :v1 ..." with placeholder names so that reserved
// words can be used as attribute names.
pub(crate) fn filter_expression(predicate: &HashMap<String, String>)
                                -> (String, HashMap<String, String>, HashMap<String, AttributeValue>) {
    let mut keys = predicate.keys().collect::<Vec<&String>>();
    keys.sort();
    let mut filter_expr = String::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    for (i, k) in keys.into_iter().enumerate() {
        if !filter_expr.is_empty() {
            filter_expr.push_str(" AND ");
        }
        filter_expr.push_str(format!("#k{} = :v{}", i, i).as_str());
        names.insert(format!("#k{}", i), k.to_string());
        values.insert(format!(":v{}", i), AttributeValue::S(predicate[k].to_string()));
    }
    (filter_expr, names, values)
}

#[async_trait]
impl<E: Persistent> Repository<E> for DDBRepository<E> {
    async fn create(&self, entity: &E) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", self.key_name.as_str())
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &E) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = next_version_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_exists(#version) AND #version = :old_version")
            .expression_attribute_names("#version", "version")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version().to_string()))
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(|err| {
            if is_conditional_failure(&err) {
                LibraryError::unavailable(format!("{} {} was modified concurrently",
                                                  table_name, entity.id()).as_str(), Some("409".to_string()), true)
            } else {
                LibraryError::from(err)
            }
        })
    }

    async fn get(&self, id: &str) -> LibraryResult<E> {
        let table_name: &str = self.table_name.as_ref();
        let req = self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", self.key_name.as_str())
            .expression_attribute_values(":pk", AttributeValue::S(id.to_string()))
            .send()
            .await.map_err(LibraryError::from)?;
        let items = req.items().unwrap_or_default();
        if items.len() > 1 {
            return Err(LibraryError::database(format!("too many {} for {}", table_name, id).as_str(), None, false));
        }
        match items.first() {
            Some(map) => parse_entity(map),
            None => Err(LibraryError::not_found(format!("{} not found for {}", table_name, id).as_str())),
        }
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key(self.key_name.as_str(), AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<E>> {
        let table_name: &str = self.table_name.as_ref();
        let exclusive_start_key = to_ddb_page(page);
        let mut request = self.client
            .scan()
            .table_name(table_name)
            .limit(cmp::min(page_size, 500) as i32)
            .consistent_read(true)
            .set_exclusive_start_key(exclusive_start_key);
        let (filter_expr, names, values) = filter_expression(predicate);
        if !filter_expr.is_empty() {
            request = request
                .filter_expression(filter_expr)
                .set_expression_attribute_names(Some(names))
                .set_expression_attribute_values(Some(values));
        }
        let req = request.send().await.map_err(LibraryError::from)?;
        let records = req.items().unwrap_or_default().iter()
            .map(parse_entity)
            .collect::<LibraryResult<Vec<E>>>()?;
        Ok(from_ddb(page, page_size, req.last_evaluated_key(), records))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use aws_sdk_dynamodb::types::AttributeValue;
    use crate::core::repository::ddb_repository::filter_expression;

    #[tokio::test]
    async fn test_should_build_filter_expression() {
        let predicate = HashMap::from([
            ("library_card_id".to_string(), "card1".to_string()),
            ("asset_id".to_string(), "a1".to_string()),
        ]);
        let (expr, names, values) = filter_expression(&predicate);
        assert_eq!("#k0 = :v0 AND #k1 = :v1", expr.as_str());
        assert_eq!(Some(&"asset_id".to_string()), names.get("#k0"));
        assert_eq!(Some(&"library_card_id".to_string()), names.get("#k1"));
        assert_eq!(Some(&AttributeValue::S("card1".to_string())), values.get(":v1"));
    }

    #[tokio::test]
    async fn test_should_build_empty_filter_expression() {
        let (expr, names, values) = filter_expression(&HashMap::new());
        assert!(expr.is_empty());
        assert!(names.is_empty());
        assert!(values.is_empty());
    }
}
