//! Static page content, fixed at build time.

/// Icon used for technologies that have no matching skill
pub const FALLBACK_ICON: &str = "code";

const VIEW_PROFILE: &str = "View Profile";

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub tagline: &'static str,
    pub resume: &'static str,
    pub photo: &'static str,
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

#[derive(Debug)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug)]
pub struct ContactLink {
    pub icon: &'static str,
    pub href: &'static str,
    pub label: &'static str,
    pub text: Option<&'static str>,
}

impl ContactLink {
    /// Mail and phone links hand off to a local app instead of a new tab
    pub fn opens_in_place(&self) -> bool {
        self.label == "Email" || self.label == "Phone"
    }

    pub fn target(&self) -> &'static str {
        if self.opens_in_place() { "_self" } else { "_blank" }
    }

    pub fn rel(&self) -> &'static str {
        if self.opens_in_place() {
            ""
        } else {
            "noopener noreferrer"
        }
    }

    pub fn display_text(&self) -> &'static str {
        self.text.unwrap_or(VIEW_PROFILE)
    }
}

pub static PROFILE: Profile = Profile {
    name: "Akhand Upadhyay",
    headline: "Full Stack Developer",
    location: "Based in India.",
    tagline: "Crafting seamless digital experiences with precision and passion.",
    resume: "/resume.pdf",
    photo: "/profile.webp",
};

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", icon: "html5" },
    Skill { name: "CSS3", icon: "css3" },
    Skill { name: "JavaScript", icon: "javascript" },
    Skill { name: "React", icon: "react" },
    Skill { name: "Node.js", icon: "nodedotjs" },
    Skill { name: "Express", icon: "express" },
    Skill { name: "MongoDB", icon: "mongodb" },
    Skill { name: "SQL", icon: "mysql" },
    Skill { name: "Redux", icon: "redux" },
    Skill { name: "Tailwind", icon: "tailwindcss" },
    Skill { name: "TypeScript", icon: "typescript" },
    Skill { name: "Postman", icon: "postman" },
    Skill { name: "Git", icon: "git" },
    Skill { name: "WebRTC", icon: "webrtc" },
    Skill { name: "WebSockets", icon: "socketdotio" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bedtalk",
        description: "A platform where strangers can connect over voice calls, text, and photos. Features real-time communication using WebRTC.",
        tech: &["React", "Express", "Node.js", "WebSockets", "WebRTC", "Tailwind"],
        icon: "message-square",
        link: "https://www.bedtalk.in",
        image: "/bedtalk.png",
    },
    Project {
        title: "Pillow",
        description: "A fully responsive website offering a smooth user experience. Built with a robust MERN stack backend.",
        tech: &["React", "Express", "Node.js", "MongoDB"],
        icon: "monitor",
        link: "https://pillow-pi.vercel.app",
        image: "/pillow.png",
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    company: "Ayodhya Websoft Pvt Ltd",
    role: "Full Stack Developer",
    period: "Present",
    location: "Bhilai, Durg, Chattisgarh",
    description: "Currently working as a Full Stack Developer, contributing to various web application projects.",
    points: &[
        "Built highly secure Admin panels.",
        "Optimized API calls with accuracy.",
        "Boosted system performance with optimized architecture.",
        "Integrated RESTful APIs and implemented secure, validated forms using React Hooks.",
    ],
}];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "github",
        href: "https://github.com/codeemoon",
        label: "GitHub",
        text: None,
    },
    ContactLink {
        icon: "linkedin",
        href: "https://www.linkedin.com/in/akhand-upadhyay-a78444313",
        label: "LinkedIn",
        text: None,
    },
    ContactLink {
        icon: "mail",
        href: "mailto:upadhyayakhand909@gmail.com",
        label: "Email",
        text: Some("upadhyayakhand909@gmail.com"),
    },
    ContactLink {
        icon: "whatsapp",
        href: "https://wa.me/916392934409",
        label: "WhatsApp",
        text: Some("+91 6392934409"),
    },
    ContactLink {
        icon: "phone",
        href: "tel:+916392934409",
        label: "Phone",
        text: Some("+91 6392934409"),
    },
];

/// Finds the skill for a technology name: an exact case-insensitive match
/// first, then the first skill whose name contains it.
pub fn find_skill(tech: &str) -> Option<&'static Skill> {
    let needle = tech.to_lowercase();

    SKILLS
        .iter()
        .find(|s| s.name.to_lowercase() == needle)
        .or_else(|| SKILLS.iter().find(|s| s.name.to_lowercase().contains(&needle)))
}

pub fn tech_icon(tech: &str) -> &'static str {
    find_skill(tech).map(|s| s.icon).unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_skill_exact() {
        let skill = find_skill("node.js").expect("Node.js should match");
        assert_eq!(skill.name, "Node.js");

        let skill = find_skill("SQL").unwrap();
        assert_eq!(skill.icon, "mysql");
    }

    #[test]
    fn test_find_skill_partial() {
        let skill = find_skill("WebSocket").expect("WebSockets should match");
        assert_eq!(skill.name, "WebSockets");

        let skill = find_skill("script").unwrap();
        assert_eq!(skill.name, "JavaScript");
    }

    #[test]
    fn test_find_skill_missing() {
        assert!(find_skill("Rust").is_none());
        assert_eq!(tech_icon("Rust"), FALLBACK_ICON);
    }

    #[test]
    fn test_every_project_tech_has_icon() {
        for project in PROJECTS {
            for tech in project.tech {
                assert!(find_skill(tech).is_some(), "{tech} has no skill");
            }
        }
    }

    #[test]
    fn test_contact_targets() {
        let email = CONTACT_LINKS.iter().find(|c| c.label == "Email").unwrap();
        assert!(email.opens_in_place());
        assert_eq!(email.target(), "_self");
        assert_eq!(email.rel(), "");

        let github = CONTACT_LINKS.iter().find(|c| c.label == "GitHub").unwrap();
        assert_eq!(github.target(), "_blank");
        assert_eq!(github.rel(), "noopener noreferrer");
        assert_eq!(github.display_text(), "View Profile");
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(SKILLS.len(), 15);
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(EXPERIENCE[0].points.len(), 4);
        assert_eq!(CONTACT_LINKS.len(), 5);
    }
}
