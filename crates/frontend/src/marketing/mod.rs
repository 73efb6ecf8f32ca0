pub mod contact;
pub mod data;
pub mod home;
pub mod legal;
pub mod sections;
