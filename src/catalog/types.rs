use serde::Deserialize;
use std::collections::HashMap;

/// Movie listing the user can pick from. The numeric codes are what the
/// front-end puts in the `category` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TopRated,
    MostPopular,
    NewlyReleased,
    TrendingToday,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TopRated,
        Category::MostPopular,
        Category::NewlyReleased,
        Category::TrendingToday,
    ];

    /// Exact match on "1".."4"; anything else is not a category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Category::TopRated),
            "2" => Some(Category::MostPopular),
            "3" => Some(Category::NewlyReleased),
            "4" => Some(Category::TrendingToday),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Category::TopRated => "1",
            Category::MostPopular => "2",
            Category::NewlyReleased => "3",
            Category::TrendingToday => "4",
        }
    }

    /// Button label shown when the user is asked to choose.
    pub fn label(&self) -> &'static str {
        match self {
            Category::TopRated => "Top Rated",
            Category::MostPopular => "Most Popular",
            Category::NewlyReleased => "Newly Released",
            Category::TrendingToday => "Trending Today",
        }
    }

    /// Upstream path, relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::TopRated => "movie/top_rated",
            Category::MostPopular => "movie/popular",
            Category::NewlyReleased => "movie/now_playing",
            Category::TrendingToday => "trending/movie/day",
        }
    }

    /// Header message placed above the movie cards.
    pub fn header(&self) -> &'static str {
        match self {
            Category::TopRated => "The top rated movies are:",
            Category::MostPopular => "The most popular movies are:",
            Category::NewlyReleased => "The newly released movies are:",
            Category::TrendingToday => "The movies trending today are:",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub id: u64,
    /// `None` when the upstream entry has no poster.
    pub poster_url: Option<String>,
    pub rating: f64,
}

// --- Upstream wire format ---

#[derive(Debug, Deserialize)]
pub(crate) struct ListingPage {
    pub results: Vec<ListingEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingEntry {
    pub title: String,
    pub id: u64,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderPage {
    pub results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegionProviders {
    #[serde(default)]
    pub link: Option<String>,
}
