//! Recipe search pipeline
//!
//! Spanish ingredients in, Spanish-titled recipes out:
//! dictionary lookup, backend search, concurrent title translation, then
//! the recent-recipes ledger.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info};

use crate::client::{Recipe, RecipeApi};
use crate::error::{Error, Result};
use crate::recent::RecentRecipes;
use crate::translate::dictionary;
use crate::translate::{CachedTranslator, Translation, TranslationApi};

/// Search results plus translation telemetry
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Recipes in backend order, titles translated where possible
    pub recipes: Vec<Recipe>,
    /// English terms sent to the backend
    pub terms: Vec<String>,
    /// Titles translated by the remote endpoint
    pub translated: usize,
    /// Titles served from the translation cache
    pub cached: usize,
    /// Titles kept in their original language
    pub unchanged: usize,
}

/// Orchestrates one ingredient search end to end
pub struct RecipeSearch<C: RecipeApi, T: TranslationApi> {
    client: Arc<C>,
    translator: Arc<CachedTranslator<T>>,
    recent: Arc<RecentRecipes>,
    source_lang: String,
    target_lang: String,
}

impl<C: RecipeApi, T: TranslationApi> RecipeSearch<C, T> {
    pub fn new(
        client: Arc<C>,
        translator: Arc<CachedTranslator<T>>,
        recent: Arc<RecentRecipes>,
    ) -> Self {
        Self {
            client,
            translator,
            recent,
            source_lang: crate::translate::DEFAULT_SOURCE_LANG.to_string(),
            target_lang: crate::translate::DEFAULT_TARGET_LANG.to_string(),
        }
    }

    /// Translate titles from `source` into `target` instead of en→es
    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_lang = source.into();
        self.target_lang = target.into();
        self
    }

    /// Search and return recipes with translated titles.
    pub async fn search<S: AsRef<str>>(&self, ingredients: &[S]) -> Result<Vec<Recipe>> {
        Ok(self.search_detailed(ingredients).await?.recipes)
    }

    /// Search and report how each title was obtained.
    ///
    /// Backend failures are returned as errors. Translation and ledger
    /// failures are absorbed: the affected recipe keeps its original title
    /// and the search still succeeds.
    pub async fn search_detailed<S: AsRef<str>>(&self, ingredients: &[S]) -> Result<SearchReport> {
        if ingredients.iter().all(|i| i.as_ref().trim().is_empty()) {
            return Err(Error::Validation(
                "Debes ingresar al menos un ingrediente".to_string(),
            ));
        }

        for ingredient in ingredients {
            let ingredient = ingredient.as_ref();
            if !ingredient.trim().is_empty() && dictionary::lookup(ingredient).is_none() {
                debug!("'{}' not in dictionary, sending as typed", ingredient.trim());
            }
        }

        let terms: Vec<String> = dictionary::translate_ingredients(ingredients)
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect();

        debug!("Searching recipes for: {}", terms.join(", "));
        let recipes = self.client.search_recipes(&terms).await?;

        if recipes.is_empty() {
            info!("No recipes matched {} ingredients", terms.len());
            return Ok(SearchReport {
                terms,
                ..Default::default()
            });
        }

        debug!("Translating {} recipe titles concurrently", recipes.len());
        let outcomes = join_all(recipes.iter().map(|recipe| {
            self.translator
                .translate_detailed(&recipe.title, &self.source_lang, &self.target_lang)
        }))
        .await;

        let mut report = SearchReport {
            terms,
            ..Default::default()
        };

        for (mut recipe, outcome) in recipes.into_iter().zip(outcomes) {
            match &outcome {
                Translation::Translated(_) => report.translated += 1,
                Translation::Cached(_) => report.cached += 1,
                Translation::Unchanged { .. } => report.unchanged += 1,
            }
            recipe.title = outcome.into_text();
            report.recipes.push(recipe);
        }

        debug!(
            "Translation cache holds {} entries",
            self.translator.cache_len()
        );
        self.recent.add_many(&report.recipes);

        info!(
            "Search returned {} recipes ({} translated, {} cached, {} unchanged)",
            report.recipes.len(),
            report.translated,
            report.cached,
            report.unchanged
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockRecipeClient;
    use crate::client::fixtures::RecipeBuilder;
    use crate::error::{ApiError, TranslateError};
    use crate::storage::MemoryStore;
    use crate::translate::mock::MockTranslationApi;
    use std::time::{Duration, Instant};

    struct Harness {
        client: Arc<MockRecipeClient>,
        translator: Arc<CachedTranslator<MockTranslationApi>>,
        recent: Arc<RecentRecipes>,
    }

    impl Harness {
        fn new(client: MockRecipeClient, api: MockTranslationApi) -> Self {
            Self {
                client: Arc::new(client),
                translator: Arc::new(CachedTranslator::new(api)),
                recent: Arc::new(RecentRecipes::new(Box::new(MemoryStore::new()))),
            }
        }

        fn search(&self) -> RecipeSearch<MockRecipeClient, MockTranslationApi> {
            RecipeSearch::new(
                self.client.clone(),
                self.translator.clone(),
                self.recent.clone(),
            )
        }
    }

    fn three_recipes() -> Vec<Recipe> {
        vec![
            RecipeBuilder::new(1).title("Chicken Soup").build(),
            RecipeBuilder::new(2).title("Beef Stew").build(),
            RecipeBuilder::new(3).title("Rice Pudding").build(),
        ]
    }

    async fn translating_api() -> MockTranslationApi {
        MockTranslationApi::new()
            .with_translation("Chicken Soup", "Sopa de pollo")
            .await
            .with_translation("Beef Stew", "Estofado de res")
            .await
            .with_translation("Rice Pudding", "Arroz con leche")
            .await
    }

    #[tokio::test]
    async fn test_titles_translated_in_backend_order() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let h = Harness::new(client, translating_api().await);

        let recipes = h.search().search(&["pollo", "arroz", "leche"]).await.unwrap();

        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Sopa de pollo", "Estofado de res", "Arroz con leche"]);
        let ids: Vec<u64> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_ingredients_go_through_dictionary() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let h = Harness::new(client, translating_api().await);

        h.search()
            .search(&["Tomate", " CEBOLLA ", "quinoa"])
            .await
            .unwrap();

        assert_eq!(
            h.client.searched_terms().await,
            vec![vec!["tomato", "onion", "quinoa"]]
        );
    }

    #[tokio::test]
    async fn test_one_failed_translation_keeps_original_title() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let api = translating_api()
            .await
            .with_failure("Beef Stew", TranslateError::Timeout)
            .await;
        let h = Harness::new(client, api);

        let report = h
            .search()
            .search_detailed(&["pollo", "res", "arroz"])
            .await
            .unwrap();

        assert_eq!(report.recipes.len(), 3);
        assert_eq!(report.recipes[0].title, "Sopa de pollo");
        assert_eq!(report.recipes[1].title, "Beef Stew");
        assert_eq!(report.recipes[2].title, "Arroz con leche");
        assert_eq!(report.translated, 2);
        assert_eq!(report.unchanged, 1);
        assert_eq!(h.recent.get_all().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_backend_result() {
        let h = Harness::new(MockRecipeClient::new(), MockTranslationApi::new());

        let report = h
            .search()
            .search_detailed(&["ajo", "sal", "agua"])
            .await
            .unwrap();

        assert!(report.recipes.is_empty());
        assert_eq!(h.translator.inner().call_count().await, 0);
        assert!(h.recent.get_all().is_empty());
    }

    #[tokio::test]
    async fn test_backend_error_propagates_and_ledger_untouched() {
        let client = MockRecipeClient::new()
            .with_error(ApiError::ServerError("Error al buscar recetas".to_string()))
            .await;
        let h = Harness::new(client, MockTranslationApi::new());

        let err = h
            .search()
            .search(&["ajo", "sal", "agua"])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));
        assert!(h.recent.get_all().is_empty());
    }

    #[tokio::test]
    async fn test_blank_ingredients_rejected_before_network() {
        let h = Harness::new(MockRecipeClient::new(), MockTranslationApi::new());

        let empty: [&str; 0] = [];
        assert!(matches!(
            h.search().search(&empty).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            h.search().search(&["  ", ""]).await,
            Err(Error::Validation(_))
        ));
        assert_eq!(h.client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_ledger_holds_translated_titles_last_first() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let h = Harness::new(client, translating_api().await);

        h.search().search(&["pollo", "res", "arroz"]).await.unwrap();

        let recent = h.recent.get_all();
        let titles: Vec<&str> = recent.iter().map(|e| e.recipe.title.as_str()).collect();
        assert_eq!(titles, vec!["Arroz con leche", "Estofado de res", "Sopa de pollo"]);
    }

    #[tokio::test]
    async fn test_repeat_search_uses_translation_cache() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let h = Harness::new(client, translating_api().await);

        h.search().search(&["pollo", "res", "arroz"]).await.unwrap();
        let report = h
            .search()
            .search_detailed(&["pollo", "res", "arroz"])
            .await
            .unwrap();

        assert_eq!(report.cached, 3);
        assert_eq!(report.translated, 0);
        assert_eq!(h.translator.inner().call_count().await, 3);
    }

    #[tokio::test]
    async fn test_translations_run_concurrently() {
        let client = MockRecipeClient::new()
            .with_search_results(three_recipes())
            .await;
        let api = translating_api()
            .await
            .with_delay(Duration::from_millis(200))
            .await;
        let h = Harness::new(client, api);

        let started = Instant::now();
        h.search().search(&["pollo", "res", "arroz"]).await.unwrap();

        // Sequential dispatch would take at least 600ms
        assert!(started.elapsed() < Duration::from_millis(550));
    }

    #[tokio::test]
    async fn test_custom_language_pair() {
        let client = MockRecipeClient::new()
            .with_search_results(vec![RecipeBuilder::new(1).title("Chicken Soup").build()])
            .await;
        let api = MockTranslationApi::new()
            .with_translation("Chicken Soup", "Soupe au poulet")
            .await;
        let h = Harness::new(client, api);

        h.search()
            .with_languages("en", "fr")
            .search(&["pollo", "sal", "agua"])
            .await
            .unwrap();

        let calls = h.translator.inner().calls().await;
        assert_eq!(calls[0].1, "en");
        assert_eq!(calls[0].2, "fr");
    }
}
