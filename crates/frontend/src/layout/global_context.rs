use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Screen shown in the main area
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Designs {
        search: String,
    },
    Book {
        design_id: String,
    },
    Bookings,
    Admin,
}

/// Query-string form of a `Page`: `?page=designs&search=gown`
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    design: Option<String>,
}

impl Page {
    pub fn from_query(query: &str) -> Page {
        let q: PageQuery = serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
        match q.page.as_deref() {
            Some("designs") => Page::Designs {
                search: q.search.unwrap_or_default(),
            },
            Some("book") => match q.design {
                Some(design_id) if !design_id.is_empty() => Page::Book { design_id },
                _ => Page::Designs {
                    search: String::new(),
                },
            },
            Some("bookings") => Page::Bookings,
            Some("admin") => Page::Admin,
            // A bare `?search=` link opens the catalog
            _ => match q.search {
                Some(search) => Page::Designs { search },
                None => Page::Home,
            },
        }
    }

    pub fn to_query(&self) -> String {
        let q = match self {
            Page::Home => PageQuery::default(),
            Page::Designs { search } => PageQuery {
                page: Some("designs".into()),
                search: (!search.is_empty()).then(|| search.clone()),
                ..Default::default()
            },
            Page::Book { design_id } => PageQuery {
                page: Some("book".into()),
                design: Some(design_id.clone()),
                ..Default::default()
            },
            Page::Bookings => PageQuery {
                page: Some("bookings".into()),
                ..Default::default()
            },
            Page::Admin => PageQuery {
                page: Some("admin".into()),
                ..Default::default()
            },
        };
        serde_qs::to_string(&q).unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
}

impl AppGlobalContext {
    /// Start on the screen named by the current URL
    pub fn new() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self {
            page: RwSignal::new(Page::from_query(&search)),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }

    /// Keep the URL query string in step with the current page
    pub fn init_router_integration(&self) {
        let page = self.page;
        Effect::new(move |_| {
            let query = page.get().to_query();
            let new_url = if query.is_empty() {
                "/".to_string()
            } else {
                format!("?{}", query)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search.trim_start_matches('?') == query {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation context provided by `App`
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_from_query() {
        assert_eq!(Page::from_query(""), Page::Home);
        assert_eq!(
            Page::from_query("?page=designs&search=saree"),
            Page::Designs {
                search: "saree".into()
            }
        );
        assert_eq!(
            Page::from_query("?search=gown"),
            Page::Designs {
                search: "gown".into()
            }
        );
        assert_eq!(
            Page::from_query("page=book&design=RN002"),
            Page::Book {
                design_id: "RN002".into()
            }
        );
        assert_eq!(Page::from_query("page=bookings"), Page::Bookings);
        assert_eq!(Page::from_query("page=nowhere"), Page::Home);
    }

    #[test]
    fn test_page_query_round_trip() {
        for page in [
            Page::Home,
            Page::Designs {
                search: "gown".into(),
            },
            Page::Book {
                design_id: "RN003".into(),
            },
            Page::Bookings,
            Page::Admin,
        ] {
            assert_eq!(Page::from_query(&page.to_query()), page);
        }
    }
}
