//! Static portfolio content.
//!
//! Everything the page shows is compiled in. The web frontend reads these
//! tables once at start-up; nothing here is ever mutated.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in 0..=100.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    /// Icon identifier resolved to a glyph by the frontend.
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    /// Mean skill level; an empty category aggregates to 0.
    pub fn aggregate(&self) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.skills.iter().map(|s| u32::from(s.level)).sum();
        f64::from(sum) / self.skills.len() as f64
    }

    /// First word of the title, used as the radar axis label.
    pub fn short_label(&self) -> &'static str {
        self.title.split_whitespace().next().unwrap_or("")
    }

    pub fn top_skills(&self, n: usize) -> &'static [Skill] {
        &self.skills[..n.min(self.skills.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Volunteering {
    pub role: &'static str,
    pub organization: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub roles: &'static [&'static str],
    pub bio: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("category #{index} has a blank title")]
    BlankTitle { index: usize },
    #[error("category '{category}' has a skill with a blank name")]
    BlankSkillName { category: &'static str },
    #[error("skill '{skill}' in '{category}' has level {level}, expected 0..=100")]
    LevelOutOfRange {
        category: &'static str,
        skill: &'static str,
        level: u8,
    },
}

/// Check a skill table before it is handed to the radar projector.
pub fn validate(categories: &[SkillCategory]) -> Result<(), ContentError> {
    for (index, cat) in categories.iter().enumerate() {
        if cat.title.trim().is_empty() {
            return Err(ContentError::BlankTitle { index });
        }
        for skill in cat.skills {
            if skill.name.trim().is_empty() {
                return Err(ContentError::BlankSkillName {
                    category: cat.title,
                });
            }
            if skill.level > 100 {
                return Err(ContentError::LevelOutOfRange {
                    category: cat.title,
                    skill: skill.name,
                    level: skill.level,
                });
            }
        }
    }
    Ok(())
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Maooz Khan",
    title: "AI/ML Engineer",
    company: "BytechSol LLC",
    tagline: "Building the future with Automation & Intelligence",
    location: "Karachi, Sindh, Pakistan",
    email: "maooz.khan@example.com",
    linkedin: "https://linkedin.com/in/maoozkhan",
    github: "https://github.com/maoozkhan",
    roles: &[
        "Automation Engineer",
        "ODOO Developer",
        "Web Application Developer",
        "CRM Specialist",
    ],
    bio: "I am currently pursuing a BS in Computer Science with a strong focus on software \
          development, data analysis, and AI/ML. I am passionate about building real-world \
          solutions using modern technologies and automation. Open to internships, frontend \
          developer roles, and networking opportunities.",
};

pub const EXPERIENCE: &[Experience] = &[Experience {
    id: 1,
    role: "AI/ML Engineer",
    company: "BytechSol LLC",
    period: "July 2025 – Present",
    location: "Karachi, Pakistan",
    description: &[
        "Leading automation initiatives and developing AI-driven solutions.",
        "Customizing ODOO ERP modules to streamline business processes.",
        "Developing scalable web applications and integrating CRM systems.",
    ],
}];

pub const EDUCATION: &[Education] = &[Education {
    degree: "BS Computer Science",
    institution: "Dawood University of Engineering & Technology",
    year: "In Progress",
}];

pub const VOLUNTEERING: &[Volunteering] = &[Volunteering {
    role: "Director of Event Management",
    organization: "Dawood University",
    year: "2023 - Present",
}];

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "AI & Machine Learning",
        icon: "brain",
        skills: &[
            Skill { name: "Python", level: 95 },
            Skill { name: "TensorFlow", level: 85 },
            Skill { name: "PyTorch", level: 80 },
            Skill { name: "Scikit-learn", level: 90 },
            Skill { name: "NLP", level: 85 },
            Skill { name: "Computer Vision", level: 75 },
            Skill { name: "Pandas", level: 95 },
        ],
    },
    SkillCategory {
        title: "Web Development",
        icon: "globe",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Django", level: 85 },
            Skill { name: "FastAPI", level: 80 },
            Skill { name: "HTML5/CSS3", level: 95 },
            Skill { name: "Tailwind CSS", level: 90 },
        ],
    },
    SkillCategory {
        title: "Enterprise Solutions",
        icon: "server",
        skills: &[
            Skill { name: "ODOO Development", level: 88 },
            Skill { name: "CRM Integration", level: 85 },
            Skill { name: "Business Automation", level: 90 },
            Skill { name: "ERP Customization", level: 85 },
        ],
    },
    SkillCategory {
        title: "Tools & DevOps",
        icon: "cpu",
        skills: &[
            Skill { name: "Git", level: 92 },
            Skill { name: "Docker", level: 80 },
            Skill { name: "AWS", level: 75 },
            Skill { name: "Linux", level: 85 },
            Skill { name: "PostgreSQL", level: 88 },
            Skill { name: "MongoDB", level: 80 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Intelligent CRM Automation",
        category: "AI & Automation",
        description: "An automated CRM system that uses NLP to categorize leads and predict \
                      conversion probability.",
        tech: &["Python", "ODOO", "Scikit-learn", "PostgreSQL"],
        image: "https://picsum.photos/seed/crm/800/600",
    },
    Project {
        id: 2,
        title: "Predictive Analytics Dashboard",
        category: "Data Science",
        description: "Real-time dashboard for visualizing sales data with predictive \
                      forecasting models.",
        tech: &["React", "Python", "D3.js", "FastAPI"],
        image: "https://picsum.photos/seed/analytics/800/600",
    },
    Project {
        id: 3,
        title: "Smart Inventory Management",
        category: "Web Application",
        description: "A comprehensive inventory system with automated restocking alerts and \
                      demand prediction.",
        tech: &["Django", "React", "Redis", "Docker"],
        image: "https://picsum.photos/seed/inventory/800/600",
    },
];
