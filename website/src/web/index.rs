use askama::Template;
use axum::{
    Extension,
    body::Body,
    http::header,
    response::Response,
};
use folio::{
    content::{
        CONTACT_LINKS, ContactLink, EXPERIENCE, Experience, PROFILE, PROJECTS, Profile, Project,
        SKILLS, Skill, tech_icon,
    },
    motion::Reveal,
};
use snafu::ResultExt;

use crate::{
    Result,
    error::{ResponseBuilderSnafu, TemplateSnafu},
    models::{Pref, TemplateData},
};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub struct TechBadge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Reveal class and inline timing for one element
pub struct Staged {
    pub class: &'static str,
    pub style: String,
}

impl Staged {
    fn new(reveal: Reveal, index: usize) -> Self {
        Self {
            class: reveal.class(),
            style: reveal.style(index),
        }
    }
}

pub struct ProjectView {
    pub project: &'static Project,
    pub badges: Vec<TechBadge>,
    pub motion: Staged,
}

impl ProjectView {
    fn new(index: usize, project: &'static Project) -> Self {
        let badges = project
            .tech
            .iter()
            .map(|&name| TechBadge {
                name,
                icon: tech_icon(name),
            })
            .collect();

        Self {
            project,
            badges,
            motion: Staged::new(Reveal::Rise, index),
        }
    }
}

pub struct SkillView {
    pub skill: &'static Skill,
    pub motion: Staged,
}

/// Reveal timing for the fixed parts of the page. The hero text
/// staggers in order, with the photo scaling in alongside the tagline.
pub struct Motion {
    pub headline: Staged,
    pub name: Staged,
    pub tagline: Staged,
    pub actions: Staged,
    pub contacts: Staged,
    pub photo: Staged,
    pub heading: Staged,
    pub timeline: Staged,
    pub contact_title: Staged,
    pub contact_lead: Staged,
}

impl Motion {
    fn new() -> Self {
        Self {
            headline: Staged::new(Reveal::FadeInUp, 0),
            name: Staged::new(Reveal::FadeInUp, 1),
            tagline: Staged::new(Reveal::FadeInUp, 2),
            actions: Staged::new(Reveal::FadeInUp, 3),
            contacts: Staged::new(Reveal::FadeInUp, 4),
            photo: Staged::new(Reveal::ScaleIn, 2),
            heading: Staged::new(Reveal::Fade, 0),
            timeline: Staged::new(Reveal::SlideIn, 0),
            contact_title: Staged::new(Reveal::FadeInUp, 0),
            contact_lead: Staged::new(Reveal::FadeInUp, 1),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/index.html")]
struct IndexTemplate {
    t: TemplateData,
    m: Motion,
    profile: &'static Profile,
    projects: Vec<ProjectView>,
    experience: &'static [Experience],
    skills: Vec<SkillView>,
    contacts: &'static [ContactLink],
}

pub async fn index_handler(Extension(pref): Extension<Pref>) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&pref);
    t.title = format!("{} | {}", PROFILE.name, PROFILE.headline);

    let projects = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| ProjectView::new(i, p))
        .collect();

    let skills = SKILLS
        .iter()
        .enumerate()
        .map(|(i, skill)| SkillView {
            skill,
            motion: Staged::new(Reveal::FadeInUp, i),
        })
        .collect();

    let tpl = IndexTemplate {
        t,
        m: Motion::new(),
        profile: &PROFILE,
        projects,
        experience: EXPERIENCE,
        skills,
        contacts: CONTACT_LINKS,
    };

    Response::builder()
        .status(200)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_badges_resolve_icons() {
        let view = ProjectView::new(1, &PROJECTS[0]);
        assert_eq!(view.motion.class, "reveal reveal-rise");
        assert_eq!(
            view.motion.style,
            "--reveal-delay: 100ms; --reveal-duration: 600ms"
        );
        assert_eq!(view.badges.len(), PROJECTS[0].tech.len());

        let node = view.badges.iter().find(|b| b.name == "Node.js").unwrap();
        assert_eq!(node.icon, "nodedotjs");
    }

    #[test]
    fn test_hero_motion_staggers() {
        let m = Motion::new();
        let delays = [&m.headline, &m.name, &m.tagline, &m.actions, &m.contacts]
            .map(|staged| staged.style.clone());

        assert_eq!(
            delays,
            [
                "--reveal-delay: 0ms; --reveal-duration: 600ms",
                "--reveal-delay: 100ms; --reveal-duration: 600ms",
                "--reveal-delay: 200ms; --reveal-duration: 600ms",
                "--reveal-delay: 300ms; --reveal-duration: 600ms",
                "--reveal-delay: 400ms; --reveal-duration: 600ms",
            ]
        );
        assert_eq!(m.photo.class, "reveal reveal-scale");
        assert_eq!(
            m.photo.style,
            "--reveal-delay: 200ms; --reveal-duration: 800ms"
        );
    }
}
