pub mod delete;
pub mod download;
pub mod folders;
pub mod health;
pub mod list;
pub mod params;
pub mod upload;

pub use delete::delete_handler;
pub use download::download_handler;
pub use folders::{
    create_account_handler, create_container_handler, delete_account_handler,
    delete_container_handler,
};
pub use health::{health_handler, readiness_handler, version_handler};
pub use list::{list_accounts_handler, list_containers_handler, list_objects_handler};
pub use upload::{upload_handler, upload_many_handler};
