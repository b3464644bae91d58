//! Client-side state: catalog and collections reducers, composed by the
//! root [`Store`].

pub mod app;
pub mod catalog;
pub mod collections;
pub mod mvi;
mod search_input;
mod store;

pub use app::{AppIntent, AppReducer, AppState, HomeView};
pub use search_input::SearchInput;
pub use store::Store;
