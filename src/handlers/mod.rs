pub mod health;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;
pub mod root;

pub use health::health_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use root::{not_found_handler, root_handler};
