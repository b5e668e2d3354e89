//! GraphQL documents for the two catalog operations.

pub const LIST_OPERATION: &str = "getPokemons";

pub const LIST_CREATURES: &str = r#"
query getPokemons($first: Int!) {
  pokemons(first: $first) {
    id
    number
    name
    types
    image
  }
}
"#;

pub const DETAIL_OPERATION: &str = "pokemon";

pub const CREATURE_DETAIL: &str = r#"
query pokemon($id: String, $name: String) {
  pokemon(id: $id, name: $name) {
    id
    number
    name
    weight {
      minimum
      maximum
    }
    height {
      minimum
      maximum
    }
    classification
    types
    resistant
    weaknesses
    fleeRate
    maxCP
    maxHP
    image
  }
}
"#;
