pub mod forms;
pub mod gallery;
pub mod workflow;

pub use forms::{CreatePropertyInput, PropertyFormFields, UpdatePropertyInput};
pub use gallery::{ImageGallery, RemovedImage};
