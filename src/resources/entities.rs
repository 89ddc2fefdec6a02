use crate::client::WitClient;
use crate::errors::{WitError, WitResult};
use crate::types::entity::ExpressionBody;
use crate::types::{Deleted, Entity, EntityValue};
use crate::utils::{decode, path_segment};

fn entity_path(id: &str) -> WitResult<String> {
    Ok(format!("/entities/{}", path_segment(id)?))
}

fn value_path(id: &str, value: &str) -> WitResult<String> {
    Ok(format!("{}/values/{}", entity_path(id)?, path_segment(value)?))
}

fn expression_path(id: &str, value: &str, expression: &str) -> WitResult<String> {
    Ok(format!(
        "{}/expressions/{}",
        value_path(id, value)?,
        path_segment(expression)?
    ))
}

impl WitClient {
    /// Lists the IDs of the entities configured on the app.
    pub fn entities(&self) -> WitResult<Vec<String>> {
        let result = self.get("/entities")?;
        decode(&result)
    }

    /// Fetches a single entity, builtin (`wit$temperature`) or custom.
    pub fn entity(&self, id: &str) -> WitResult<Entity> {
        let result = self.get(&entity_path(id)?)?;
        decode(&result)
    }

    /// Creates an entity. The returned value is what the service stored, not an echo of `entity`.
    /// A duplicate ID comes back as a `Conflict` remote error.
    pub fn create_entity(&self, entity: &Entity) -> WitResult<Entity> {
        let result = self.post_json("/entities", entity)?;
        decode(&result)
    }

    /// Updates the entity named by `entity.id`. Unset fields are not sent and stay as they are.
    pub fn update_entity(&self, entity: &Entity) -> WitResult<Entity> {
        if entity.id.is_empty() {
            return Err(WitError::InvalidRequest(
                "Entity id is required for an update".to_string(),
            ));
        }
        let result = self.put_json(&entity_path(&entity.id)?, entity)?;
        decode(&result)
    }

    pub fn delete_entity(&self, id: &str) -> WitResult<Deleted> {
        let result = self.delete(&entity_path(id)?)?;
        decode(&result)
    }

    /// Adds a value (with its expressions) to an entity and returns the updated entity.
    pub fn create_entity_value(&self, id: &str, value: &EntityValue) -> WitResult<Entity> {
        let resource = format!("{}/values", entity_path(id)?);
        let result = self.post_json(&resource, value)?;
        decode(&result)
    }

    pub fn delete_entity_value(&self, id: &str, value: &str) -> WitResult<Deleted> {
        let result = self.delete(&value_path(id, value)?)?;
        decode(&result)
    }

    /// Adds an expression to an entity value and returns the updated entity.
    pub fn create_entity_value_exp(
        &self,
        id: &str,
        value: &str,
        expression: &str,
    ) -> WitResult<Entity> {
        let resource = format!("{}/expressions", value_path(id, value)?);
        let result = self.post_json(&resource, &ExpressionBody { expression })?;
        decode(&result)
    }

    pub fn delete_entity_value_exp(
        &self,
        id: &str,
        value: &str,
        expression: &str,
    ) -> WitResult<Deleted> {
        let result = self.delete(&expression_path(id, value, expression)?)?;
        decode(&result)
    }
}
