use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

pub const DEFAULT_SKILL_COLOR: &str = "#9b87f5";
pub const RESUME_FILE_NAME: &str = "resume.txt";

const PROJECTS_FILE: &str = "projects.json";
const SKILLS_FILE: &str = "skills.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: &'static str, message: String },
    #[error("skill level {0} is outside 0..=100")]
    LevelOutOfRange(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub live_url: String,
    pub github_url: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Which side of a project card the screenshot sits on. Cards alternate,
/// starting with the image on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    ImageLeft,
    ImageRight,
}

impl Orientation {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::ImageLeft
        } else {
            Self::ImageRight
        }
    }

    pub fn flex_class(self) -> &'static str {
        match self {
            Self::ImageLeft => "lg:flex-row",
            Self::ImageRight => "lg:flex-row-reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Text shown beside the bar.
    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

impl TryFrom<u64> for SkillLevel {
    type Error = ContentError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(level) if level <= 100 => Ok(Self(level)),
            _ => Err(ContentError::LevelOutOfRange(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub color: Option<String>,
}

impl Skill {
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_SKILL_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

// `skills.json` as written; levels are checked when converting.
#[derive(Deserialize)]
struct SkillRecord {
    name: String,
    level: u64,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct CategoryRecord {
    title: String,
    skills: Vec<SkillRecord>,
}

impl TryFrom<CategoryRecord> for SkillCategory {
    type Error = ContentError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        let skills = record
            .skills
            .into_iter()
            .map(|s| {
                Ok(Skill {
                    name: s.name,
                    level: SkillLevel::try_from(s.level)?,
                    color: s.color,
                })
            })
            .collect::<Result<_, ContentError>>()?;
        Ok(Self {
            title: record.title,
            skills,
        })
    }
}

/// Everything the page displays that isn't markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub resume: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_files(
            &read(PROJECTS_FILE)?,
            &read(SKILLS_FILE)?,
            read(RESUME_FILE_NAME)?,
        )
    }

    fn from_files(projects: &[u8], skills: &[u8], resume: Vec<u8>) -> Result<Self, ContentError> {
        let skills = parse::<Vec<CategoryRecord>>(SKILLS_FILE, skills)?
            .into_iter()
            .map(SkillCategory::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            projects: parse(PROJECTS_FILE, projects)?,
            skills,
            resume: String::from_utf8(resume).map_err(|e| ContentError::Parse {
                file: RESUME_FILE_NAME,
                message: e.to_string(),
            })?,
        })
    }
}

/// The embedded portfolio, loaded and validated on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn read(file: &'static str) -> Result<Vec<u8>, ContentError> {
    ContentAssets::get(file)
        .map(|f| f.data.into_owned())
        .ok_or(ContentError::Missing(file))
}

fn parse<T: DeserializeOwned>(file: &'static str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = portfolio().expect("embedded content should be valid");
        assert_eq!(portfolio.projects.len(), 3);
        assert!(portfolio.projects[0].featured);
        assert!(!portfolio.projects[1].featured);
        assert!(portfolio.projects.iter().all(|p| !p.tech_stack.is_empty()));

        let titles = portfolio
            .skills
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Frontend", "Backend", "Tools & Others"]);
        assert!(portfolio.resume.contains("Experience"));
    }

    #[test]
    fn test_orientation_alternates() {
        assert_eq!(Orientation::for_index(0), Orientation::ImageLeft);
        assert_eq!(Orientation::for_index(1), Orientation::ImageRight);
        assert_eq!(Orientation::for_index(2), Orientation::ImageLeft);
        assert_eq!(Orientation::for_index(1).flex_class(), "lg:flex-row-reverse");
    }

    #[test]
    fn test_skill_level_bounds() {
        assert_eq!(SkillLevel::try_from(0u64).map(SkillLevel::percent), Ok(0));
        assert_eq!(SkillLevel::try_from(100u64).map(SkillLevel::percent), Ok(100));
        assert_eq!(
            SkillLevel::try_from(101u64),
            Err(ContentError::LevelOutOfRange(101))
        );
        assert_eq!(
            SkillLevel::try_from(256u64),
            Err(ContentError::LevelOutOfRange(256))
        );
    }

    #[test]
    fn test_label_and_fill_share_level() {
        let level = SkillLevel::try_from(85u64).unwrap();
        assert_eq!(level.label(), "85%");
        assert_eq!(level.percent(), 85);
    }

    fn load_skills(skills: &str) -> Result<Portfolio, ContentError> {
        Portfolio::from_files(b"[]", skills.as_bytes(), b"resume".to_vec())
    }

    #[test]
    fn test_out_of_range_levels_are_rejected_on_load() {
        for level in [120u64, 300] {
            let json = format!(
                r#"[{{"title": "Backend", "skills": [
                    {{"name": "Go", "level": 70}},
                    {{"name": "Rust", "level": {level}}}
                ]}}]"#
            );
            assert_eq!(load_skills(&json), Err(ContentError::LevelOutOfRange(level)));
        }
    }

    #[test]
    fn test_skill_color_defaults() {
        let json = r##"[{"title": "Tools", "skills": [
            {"name": "Git", "level": 90, "color": "#F05032"},
            {"name": "Vim", "level": 40}
        ]}]"##;
        let portfolio = load_skills(json).unwrap();
        let skills = &portfolio.skills[0].skills;
        assert_eq!(skills[0].color(), "#F05032");
        assert_eq!(skills[1].color(), DEFAULT_SKILL_COLOR);
        assert_eq!(skills[1].level.percent(), 40);
    }

    #[test]
    fn test_negative_level_fails_to_parse() {
        let json = r#"[{"title": "Tools", "skills": [{"name": "Vim", "level": -5}]}]"#;
        assert!(matches!(
            load_skills(json),
            Err(ContentError::Parse { file: SKILLS_FILE, .. })
        ));
    }

    #[test]
    fn test_missing_fields_fail_to_parse() {
        let json = br#"[{"title": "No description"}]"#;
        assert!(matches!(
            parse::<Vec<Project>>(PROJECTS_FILE, json),
            Err(ContentError::Parse { .. })
        ));
    }
}
