//! Domain models mapped from database rows.

pub mod admin_user;
pub mod page;
pub mod section;
pub mod session;
pub mod work;

pub use admin_user::AdminUser;
pub use page::{ContactsPage, HomePage, WorksPage};
pub use section::HomeSection;
pub use session::{CurrentAdmin, Session};
pub use work::WorkItem;
