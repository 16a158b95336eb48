pub mod article;
pub mod entry;
pub mod navigation;
pub mod subscription;

pub use article::ResolvedArticle;
pub use entry::{Entry, EntryId};
pub use navigation::NavigationState;
pub use subscription::{FeedId, Subscription, SubscriptionIndex};
