use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::types::{Category, ListingPage, MovieRecord, ProviderPage};
use crate::config::CatalogConfig;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned {status}")]
    Status { path: String, status: StatusCode },
    #[error("unexpected payload from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the movie catalog. One call per category listing, one
/// call per movie for watch-provider links. No retries.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_default(),
            config,
        }
    }

    /// First results page of the category listing, in upstream order.
    pub async fn fetch_category(&self, category: Category) -> Result<Vec<MovieRecord>, CatalogError> {
        let query = [
            ("api_key", self.config.api_key.as_str()),
            ("language", self.config.language.as_str()),
            ("page", "1"),
        ];
        let page: ListingPage = self.get_json(category.endpoint(), &query).await?;

        let movies: Vec<MovieRecord> = page
            .results
            .into_iter()
            .map(|entry| {
                let poster_url = match entry.poster_path {
                    Some(path) if !path.is_empty() => {
                        Some(format!("{}{}", self.config.image_base_url, path))
                    }
                    _ => {
                        debug!("Movie {} has no poster", entry.id);
                        None
                    }
                };
                MovieRecord {
                    title: entry.title,
                    id: entry.id,
                    poster_url,
                    rating: entry.vote_average,
                }
            })
            .collect();

        info!("Fetched {} movies for category {}", movies.len(), category.code());
        Ok(movies)
    }

    /// One watch-provider link per id, same order as `movie_ids`.
    /// Lookups run sequentially; a failed lookup aborts the whole batch.
    pub async fn fetch_provider_links(&self, movie_ids: &[u64]) -> Result<Vec<String>, CatalogError> {
        let mut links = Vec::with_capacity(movie_ids.len());
        for id in movie_ids {
            links.push(self.fetch_provider_link(*id).await?);
        }
        Ok(links)
    }

    async fn fetch_provider_link(&self, movie_id: u64) -> Result<String, CatalogError> {
        let path = format!("movie/{}/watch/providers", movie_id);
        let query = [("api_key", self.config.api_key.as_str())];
        let page: ProviderPage = self.get_json(&path, &query).await?;

        match page
            .results
            .get(&self.config.provider_region)
            .and_then(|region| region.link.clone())
        {
            Some(link) => Ok(link),
            None => {
                debug!(
                    "No {} provider for movie {}, using fallback link",
                    self.config.provider_region, movie_id
                );
                Ok(self.config.fallback_link.clone())
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog {} returned {}", path, status);
            return Err(CatalogError::Status {
                path: path.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport {
                path: path.to_string(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
