//! Dashboard page content.
//!
//! Components:
//! - [`BreadcrumbNav`] - Page title with breadcrumb trail
//! - [`CryptoAssetList`] - Asset holdings table
//! - [`CryptoDashboard`] - The crypto page
//! - [`PlaceholderPage`] - Pages without content yet

mod asset_list;
mod breadcrumb;
mod page;

pub use asset_list::CryptoAssetList;
pub use breadcrumb::BreadcrumbNav;
pub use page::{CryptoDashboard, PlaceholderPage};
