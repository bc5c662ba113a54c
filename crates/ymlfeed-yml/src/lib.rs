pub mod error;
pub mod model;
pub mod writer;

pub use error::FeedError;
pub use model::{FeedCategory, FeedCurrency, FeedDocument, FeedOffer, FeedShop};
pub use writer::{render_feed, write_feed_file, YmlWriter};
