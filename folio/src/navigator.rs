use std::fmt;

/// Section anchors present on the page, in document order
pub const PAGE_SECTIONS: [&str; 5] = ["about", "projects", "experience", "skills", "contact"];

const MENU_LABELS: [&str; 3] = ["Projects", "Experience", "Skills"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to bring one section into the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollIntoView {
    pub target: &'static str,
    pub behavior: ScrollBehavior,
}

impl ScrollIntoView {
    /// Fragment URL for the target anchor
    pub fn href(&self) -> String {
        format!("/#{}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub section: String,
}

impl MenuItem {
    pub fn href(&self) -> String {
        format!("/sections/{}", self.section)
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<&'static str>,
    behavior: ScrollBehavior,
}

impl Navigator {
    pub fn new(sections: &[&'static str]) -> Self {
        Self {
            sections: sections.to_vec(),
            behavior: ScrollBehavior::default(),
        }
    }

    pub fn page() -> Self {
        Self::new(&PAGE_SECTIONS)
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Finds the section with exactly this id. Unknown ids yield nothing.
    pub fn locate(&self, id: &str) -> Option<ScrollIntoView> {
        self.sections
            .iter()
            .copied()
            .find(|s| *s == id)
            .map(|target| ScrollIntoView {
                target,
                behavior: self.behavior,
            })
    }

    pub fn menu(&self) -> Vec<MenuItem> {
        MENU_LABELS
            .iter()
            .map(|&label| MenuItem {
                label,
                section: label.to_lowercase(),
            })
            .collect()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::page()
    }
}
