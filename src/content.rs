//! Fixed portfolio dataset: profile, projects, skills and contact links.
//!
//! Everything here is `'static` and read-only. Views only ever borrow from
//! [`CONTENT`].

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Technologies used, in declared order.
    pub skills: &'static [&'static str],
    pub link: &'static str,
}

/// A named group of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// Identity shown in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Stored only, never fetched.
    #[allow(dead_code)]
    pub image_url: &'static str,
}

/// Outbound link targets shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLinks {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// The complete read-only dataset backing the portfolio page.
#[derive(Debug)]
pub struct ContentStore {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub skills: &'static [SkillCategory],
    pub contact: ContactLinks,
}

const TAGLINE: &str = "Building elegant solutions to complex problems. \
    Focused on web technologies and user experience.";

pub static CONTENT: ContentStore = ContentStore {
    profile: Profile {
        name: "John Doe",
        title: "Full Stack Developer",
        tagline: TAGLINE,
        image_url: "/api/placeholder/150/150",
    },
    projects: &[
        Project {
            title: "E-commerce Platform",
            description: "Built a scalable e-commerce solution serving 10k+ monthly users. Improved checkout conversion by 25%.",
            skills: &["React", "Node.js", "PostgreSQL"],
            link: "https://github.com",
        },
        Project {
            title: "Analytics Dashboard",
            description: "Developed real-time analytics dashboard for enterprise clients. Processes 1M+ daily events.",
            skills: &["Vue.js", "Python", "AWS"],
            link: "https://github.com",
        },
    ],
    skills: &[
        SkillCategory {
            category: "Frontend",
            items: &["React", "Vue", "TypeScript", "Tailwind"],
        },
        SkillCategory {
            category: "Backend",
            items: &["Node.js", "Python", "PostgreSQL", "AWS"],
        },
        SkillCategory {
            category: "Tools",
            items: &["Git", "Docker", "Jest", "CI/CD"],
        },
    ],
    contact: ContactLinks {
        email: "mailto:john@example.com",
        github: "https://github.com",
        linkedin: "https://linkedin.com",
    },
};

#[cfg(test)]
#[path = "./content_tests.rs"]
mod tests;
