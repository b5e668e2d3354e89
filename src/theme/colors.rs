//! Creature type colors.
//!
//! Badge tints keyed by type tag, matched case-insensitively.

const TYPE_COLORS: &[(&str, &str)] = &[
    ("normal", "#a8a77a"),
    ("fire", "#ee8130"),
    ("water", "#6390f0"),
    ("electric", "#f7d02c"),
    ("grass", "#7ac74c"),
    ("ice", "#96d9d6"),
    ("fighting", "#c22e28"),
    ("poison", "#a33ea1"),
    ("ground", "#e2bf65"),
    ("flying", "#a98ff3"),
    ("psychic", "#f95587"),
    ("bug", "#a6b91a"),
    ("rock", "#b6a136"),
    ("ghost", "#735797"),
    ("dragon", "#6f35fc"),
    ("dark", "#705746"),
    ("steel", "#b7b7ce"),
    ("fairy", "#d685ad"),
];

/// Accent color for a type tag, if it is one of the known types.
pub fn type_color(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    TYPE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, color)| *color)
}
