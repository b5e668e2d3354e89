//! GraphQL-over-HTTP request and response bodies.

use serde::{Deserialize, Serialize};

use crate::error::{PokedexError, PokedexResult};
use crate::types::{CreatureDetail, CreatureSummary};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'static str,
    pub variables: &'a V,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<D> GraphQlResponse<D> {
    /// Errors win over partial data; a response with neither is `MissingData`.
    pub fn into_result(self, operation: &'static str) -> PokedexResult<D> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(PokedexError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => self.data.ok_or(PokedexError::MissingData(operation)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListVariables {
    pub first: u32,
}

#[derive(Debug, Deserialize)]
pub struct ListData {
    pub pokemons: Option<Vec<CreatureSummary>>,
}

#[derive(Debug, Deserialize)]
pub struct DetailData {
    pub pokemon: Option<CreatureDetail>,
}
