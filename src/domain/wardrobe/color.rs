//! Color palette references and the harmony table.

use serde::{Deserialize, Serialize};

/// Reference to an entry in the color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRef {
    pub id: i32,
    pub name: String,
}

impl ColorRef {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-insensitive substring match on the palette name.
    pub fn matches(&self, wanted: &str) -> bool {
        self.name.to_lowercase().contains(&wanted.trim().to_lowercase())
    }
}

/// Palette names the harmony table knows about.
pub const KNOWN_COLORS: &[&str] = &[
    "Blanco", "Negro", "Gris", "Rojo", "Naranja", "Amarillo", "Verde", "Azul", "Morado",
    "Rosado", "Marrón", "Beige",
];

/// Colors that combine well with `base`.
///
/// Unknown colors combine with everything in the palette.
pub fn compatible_colors(base: &str) -> &'static [&'static str] {
    let base = base.trim().to_lowercase();
    match base.as_str() {
        "blanco" => &[
            "Negro", "Rojo", "Azul", "Verde", "Gris", "Marrón", "Rosado", "Morado",
        ],
        "negro" => &["Blanco", "Rojo", "Amarillo", "Gris", "Rosado", "Azul", "Verde"],
        "gris" => &["Rojo", "Azul", "Rosado", "Verde", "Negro", "Blanco"],
        "rojo" => &["Negro", "Blanco", "Gris", "Amarillo"],
        "naranja" => &["Negro", "Blanco", "Gris", "Azul"],
        "amarillo" => &["Negro", "Blanco", "Gris", "Azul", "Morado"],
        "verde" => &["Negro", "Blanco", "Gris", "Amarillo", "Marrón"],
        "azul" => &["Negro", "Blanco", "Gris", "Naranja", "Amarillo"],
        "morado" => &["Negro", "Blanco", "Gris", "Amarillo", "Rosado"],
        "rosado" => &["Negro", "Blanco", "Gris", "Morado", "Azul"],
        "marrón" | "marron" => &["Blanco", "Beige", "Verde", "Amarillo"],
        "beige" => &["Negro", "Blanco", "Marrón", "Azul", "Verde"],
        _ => KNOWN_COLORS,
    }
}
