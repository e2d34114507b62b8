use std::collections::HashMap;

/// Cuisine used whenever none can be inferred from the personality table or
/// the source payload.
pub const DEFAULT_CUISINE: &str = "Italian";

/// Static personality -> cuisine mapping.
///
/// The first entry of a personality's list is the one used when building the
/// outbound request; the rest document the broader association.
pub struct CuisineTable {
    map: HashMap<&'static str, Vec<&'static str>>,
}

impl CuisineTable {
    pub fn new() -> Self {
        let mut map = HashMap::new();

        map.insert("Openness", vec!["Japanese", "Thai", "Indian"]);
        map.insert("Conscientiousness", vec!["Mediterranean", "French"]);
        map.insert("Extraversion", vec!["BBQ", "Mexican", "Spanish"]);
        map.insert("Agreeableness", vec!["Italian", "Greek"]);
        map.insert("Neuroticism", vec!["Comfort Food", "American"]);

        CuisineTable { map }
    }

    /// Cuisine to request for a personality label. Unknown labels silently
    /// fall back to [`DEFAULT_CUISINE`].
    pub fn infer(&self, personality: &str) -> &'static str {
        self.map
            .get(personality)
            .and_then(|cuisines| cuisines.first())
            .copied()
            .unwrap_or(DEFAULT_CUISINE)
    }

    /// All cuisines associated with a personality label, if it is known.
    pub fn cuisines_for(&self, personality: &str) -> Option<&[&'static str]> {
        self.map.get(personality).map(|c| c.as_slice())
    }
}

impl Default for CuisineTable {
    fn default() -> Self {
        Self::new()
    }
}
