pub mod contact;
pub mod route;
