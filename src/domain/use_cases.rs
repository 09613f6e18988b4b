pub mod editor_session;
pub mod portfolio;
pub mod project_editor;
pub mod site_content;
pub mod skills;
