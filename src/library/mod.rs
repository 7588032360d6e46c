/*!
 * Podcasts library catalog access.
 *
 * This module locates the app's library database, enumerates downloaded
 * episodes, and resolves cached transcript documents. It is split into:
 *
 * - `models`: Catalog entity models
 * - `store`: Read-only database access
 */

// Re-export main types for easier usage
pub use self::models::Episode;
pub use self::store::LibraryStore;

// Submodules
pub mod models;
pub mod store;
