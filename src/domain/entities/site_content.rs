use serde::{Deserialize, Serialize};

/// The one and only site content row lives under this id.
pub const SITE_CONTENT_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub id: i64,
    #[serde(default)]
    pub hero_name: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub linkedin_link: Option<String>,
    #[serde(default)]
    pub twitter_link: Option<String>,
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContentForm::default().into_record()
    }
}

/// Editable site content fields. Every field is sent on save, so a `None`
/// clears whatever an earlier save wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContentForm {
    #[serde(default)]
    pub hero_name: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub linkedin_link: Option<String>,
    #[serde(default)]
    pub twitter_link: Option<String>,
}

impl SiteContentForm {
    pub fn into_record(self) -> SiteContent {
        SiteContent {
            id: SITE_CONTENT_ID,
            hero_name: self.hero_name,
            hero_title: self.hero_title,
            hero_description: self.hero_description,
            email: self.email,
            phone: self.phone,
            location: self.location,
            github_link: self.github_link,
            linkedin_link: self.linkedin_link,
            twitter_link: self.twitter_link,
        }
    }
}

impl From<&SiteContent> for SiteContentForm {
    fn from(content: &SiteContent) -> Self {
        SiteContentForm {
            hero_name: content.hero_name.clone(),
            hero_title: content.hero_title.clone(),
            hero_description: content.hero_description.clone(),
            email: content.email.clone(),
            phone: content.phone.clone(),
            location: content.location.clone(),
            github_link: content.github_link.clone(),
            linkedin_link: content.linkedin_link.clone(),
            twitter_link: content.twitter_link.clone(),
        }
    }
}
