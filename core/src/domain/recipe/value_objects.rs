use crate::domain::recipe::{entities::Recipe, helpers::slugify};

/// Recipes the caller has already seen.
///
/// Entries may be recipe titles or recipe ids. Recipe ids are the slug of
/// their title, so both forms reduce to the same key and are matched the
/// same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    entries: Vec<String>,
}

impl ExclusionList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { entries }
    }

    /// Parses the comma separated form sent by multipart clients.
    pub fn from_comma_separated(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Human readable names for prompting; slugs are turned back into words.
    pub fn display_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                if entry.contains(char::is_whitespace) {
                    entry.clone()
                } else {
                    entry.replace(['-', '_'], " ")
                }
            })
            .collect()
    }

    pub fn excludes(&self, recipe: &Recipe) -> bool {
        let title_key = slugify(&recipe.title);
        let id_key = slugify(&recipe.id);

        self.entries.iter().map(|entry| slugify(entry)).any(|key| {
            !key.is_empty() && (key == title_key || key == id_key)
        })
    }
}

#[derive(Debug, Clone)]
pub struct IdentifyIngredientsInput {
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub ingredients: Vec<String>,
    pub exclusions: ExclusionList,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesFromImageInput {
    pub image_data: Vec<u8>,
    pub exclusions: ExclusionList,
}
