pub mod adoption_request;
pub mod animal;
pub mod animal_image;
pub mod facility;
pub mod reference;
pub mod report;
pub mod user;
