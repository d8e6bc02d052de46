pub mod post_enums;

pub use post_enums::{PostStatus, PostType};
