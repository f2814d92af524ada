//! Spanish to English ingredient dictionary
//!
//! The recipe backend only understands English ingredient names. Common
//! Spanish names (and their plurals) are mapped locally; anything else is
//! forwarded as typed, since the backend may still match it literally.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Spanish ingredient name → English search term
const INGREDIENTS: &[(&str, &str)] = &[
    // Vegetables
    ("tomate", "tomato"),
    ("tomates", "tomatoes"),
    ("cebolla", "onion"),
    ("cebollas", "onions"),
    ("ajo", "garlic"),
    ("zanahoria", "carrot"),
    ("zanahorias", "carrots"),
    ("patata", "potato"),
    ("patatas", "potatoes"),
    ("papa", "potato"),
    ("papas", "potatoes"),
    ("lechuga", "lettuce"),
    ("espinaca", "spinach"),
    ("espinacas", "spinach"),
    ("brócoli", "broccoli"),
    ("coliflor", "cauliflower"),
    ("pimiento", "bell pepper"),
    ("pimientos", "bell peppers"),
    ("aguacate", "avocado"),
    ("aguacates", "avocados"),
    ("pepino", "cucumber"),
    ("pepinos", "cucumbers"),
    ("champiñón", "mushroom"),
    ("champiñones", "mushrooms"),
    ("choclo", "corn"),
    ("maíz", "corn"),
    // Fruit
    ("manzana", "apple"),
    ("manzanas", "apples"),
    ("plátano", "banana"),
    ("plátanos", "bananas"),
    ("naranja", "orange"),
    ("naranjas", "oranges"),
    ("limón", "lemon"),
    ("limones", "lemons"),
    ("lima", "lime"),
    ("limas", "limes"),
    ("fresa", "strawberry"),
    ("fresas", "strawberries"),
    ("uva", "grape"),
    ("uvas", "grapes"),
    ("piña", "pineapple"),
    ("piñas", "pineapples"),
    ("melocotón", "peach"),
    ("melocotones", "peaches"),
    ("pera", "pear"),
    ("peras", "pears"),
    // Meat & fish
    ("pollo", "chicken"),
    ("carne", "beef"),
    ("res", "beef"),
    ("cerdo", "pork"),
    ("pescado", "fish"),
    ("salmón", "salmon"),
    ("trucha", "trout"),
    ("atún", "tuna"),
    ("camarón", "shrimp"),
    ("camarones", "shrimp"),
    // Dairy & eggs
    ("huevo", "egg"),
    ("huevos", "eggs"),
    ("leche", "milk"),
    ("queso", "cheese"),
    ("yogur", "yogurt"),
    ("mantequilla", "butter"),
    // Staples
    ("arroz", "rice"),
    ("pan", "bread"),
    ("harina", "flour"),
    ("pasta", "pasta"),
    ("avena", "oats"),
    // Seasoning & condiments
    ("sal", "salt"),
    ("pimienta", "pepper"),
    ("azúcar", "sugar"),
    ("aceite", "oil"),
    ("vinagre", "vinegar"),
    ("mostaza", "mustard"),
    ("salsa", "sauce"),
    // Drinks
    ("agua", "water"),
    ("vino", "wine"),
    ("cerveza", "beer"),
];

static DICTIONARY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| INGREDIENTS.iter().copied().collect());

/// Lower-case and trim an ingredient as typed by the user.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Look up the English name of a single Spanish ingredient.
pub fn lookup(term: &str) -> Option<&'static str> {
    DICTIONARY.get(normalize(term).as_str()).copied()
}

/// Translate user-typed ingredients into English search terms.
///
/// Output has the same length and order as the input. Unknown ingredients
/// come back normalized but otherwise unchanged.
pub fn translate_ingredients<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|term| {
            let normalized = normalize(term.as_ref());
            match DICTIONARY.get(normalized.as_str()) {
                Some(english) => (*english).to_string(),
                None => normalized,
            }
        })
        .collect()
}

/// Number of known ingredient names
pub fn len() -> usize {
    DICTIONARY.len()
}
