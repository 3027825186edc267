use hexa_core::HexaConfig;
use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u64 = 20;
const DEFAULT_PAGE_LIMIT: u64 = 1000;

/// Pagination parameters: zero-based page index, page size and optional sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pageable {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub size: u64,
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl Pageable {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// The request for the following page, same size and sort.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    /// The request for the preceding page, or `None` on the first page.
    pub fn previous(&self) -> Option<Self> {
        self.page.checked_sub(1).map(|page| Self {
            page,
            ..self.clone()
        })
    }

    /// Apply `config`: a zero size becomes the default size, and sizes above
    /// the limit are clamped to it.
    pub fn bounded(mut self, config: &PagingConfig) -> Self {
        if self.size == 0 {
            self.size = config.default_size;
        }
        self.size = self.size.min(config.max_size);
        self
    }
}

/// Paging limits applied by [`Pageable::bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PagingConfig {
    /// Load from `HexaConfig` keys `hexa.paging.size` and `hexa.paging.limit`.
    pub fn from_config(config: &HexaConfig) -> Self {
        let defaults = Self::default();
        Self {
            default_size: config.get_or("hexa.paging.size", defaults.default_size),
            max_size: config.get_or("hexa.paging.limit", defaults.max_size),
        }
    }
}

/// A page of results with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: u64) -> Self {
        let total_pages = if pageable.size == 0 {
            0
        } else {
            total_elements.div_ceil(pageable.size)
        };
        Self {
            content,
            page: pageable.page,
            size: pageable.size,
            total_elements,
            total_pages,
        }
    }

    pub fn empty(pageable: &Pageable) -> Self {
        Self::new(Vec::new(), pageable, 0)
    }

    /// Convert the content, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}
