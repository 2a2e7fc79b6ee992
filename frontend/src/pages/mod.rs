pub mod article_detail;
pub mod home;
pub mod not_found;
