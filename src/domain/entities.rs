pub mod dashboard;
pub mod project;
pub mod record_id;
pub mod site_content;
pub mod skill;
pub mod view;
