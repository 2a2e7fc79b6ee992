// Reusable components live here.

pub mod article_card;
pub mod error_banner;
pub mod loading_spinner;
pub mod publish_button;
pub mod raw_html;
pub mod search_bar;
