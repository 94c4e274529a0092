pub mod catalog;
pub mod contact;
pub mod controller;
pub mod error;
pub mod sink;

pub use catalog::ServiceCatalog;
pub use controller::ModalFormController;
