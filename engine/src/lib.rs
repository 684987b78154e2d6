pub mod config;
pub mod credential;
pub mod generation;
pub mod image_model;
pub mod output;
pub mod session;
pub mod size;
pub mod style;

pub use credential::Credential;
pub use image_model::ImageModel;

pub type ImgModBox = Box<dyn ImageModel>;
pub const APP_NAME: &str = "image_generator";
