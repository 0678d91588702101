//! Presentation-side collaborators: the HTTP client mirror of the list
//! endpoint, the user-local favorites store, the debounced search input, and
//! the page-accumulating feed. None of this is server state.

pub mod api;
pub mod favorites;
pub mod feed;
pub mod search;

/// Which view the list is showing; drives the `ids` wire parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListTab {
    #[default]
    All,
    Favorites,
}
