//! CLI command implementations.

pub mod excerpt;
pub mod init;
pub mod new;
pub mod posts;
pub mod sitemap;
pub mod slug;

pub use excerpt::show_excerpt;
pub use init::init_blog;
pub use new::new_post;
pub use posts::{list_posts, list_tags, show_post, ListOptions};
pub use sitemap::write_sitemap;
pub use slug::show_slug;
