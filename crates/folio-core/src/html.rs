//! HTML fragments for the data-driven page sections.
//!
//! The host page supplies the static shell; these builders fill the hero,
//! about, contact, project, skill and experience sections and the resume body
//! from the content tables.

use crate::content::{Education, Experience, PersonalInfo, Project, SkillCategory, Volunteering};
use crate::svg::escape_xml;
use std::fmt::Write;

/// URL without its scheme, for printed contact lines.
pub fn display_url(url: &str) -> &str {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

/// Name, headline (title and primary role) and tagline.
pub fn hero_html(info: &PersonalInfo) -> String {
    let mut out = String::new();
    _ = write!(out, "<h1 class='hero-name'>{}</h1>", escape_xml(info.name));
    _ = write!(
        out,
        "<div class='hero-headline'><span class='hero-title'>{}</span>",
        escape_xml(info.title)
    );
    if let Some(role) = info.roles.first() {
        _ = write!(
            out,
            "<span class='hero-sep'>|</span><span class='hero-role'>{}</span>",
            escape_xml(role)
        );
    }
    _ = write!(
        out,
        "</div><p class='hero-tagline'>{}</p>",
        escape_xml(info.tagline)
    );
    out
}

/// Bio, role chips and the location/email card.
pub fn about_html(info: &PersonalInfo) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        "<h2>About Me</h2><p class='about-bio'>{}</p><div class='about-roles'>",
        escape_xml(info.bio)
    );
    for role in info.roles {
        _ = write!(out, "<span class='role-chip'>{}</span>", escape_xml(role));
    }
    _ = write!(
        out,
        "</div><div class='about-facts'><p><span class='label'>Location</span>{}</p>\
         <p><span class='label'>Email</span>{}</p></div>",
        escape_xml(info.location),
        escape_xml(info.email)
    );
    out
}

pub fn contact_html(info: &PersonalInfo) -> String {
    let mut out = String::from(
        "<h2>Let's Work Together</h2><p>I'm always open to discussing new projects, creative \
         ideas, or opportunities to be part of your visions.</p><div class='contact-links'>",
    );
    _ = write!(
        out,
        "<a class='contact-email' href='mailto:{}'>Email Me</a>",
        escape_xml(info.email)
    );
    _ = write!(
        out,
        "<a class='contact-linkedin' href='{}' target='_blank' rel='noreferrer'>LinkedIn</a>",
        escape_xml(info.linkedin)
    );
    _ = write!(
        out,
        "<a class='contact-github' href='{}' target='_blank' rel='noreferrer'>GitHub</a></div>",
        escape_xml(info.github)
    );
    out
}

pub fn education_html(entries: &[Education]) -> String {
    let mut out = String::new();
    for ed in entries {
        _ = write!(
            out,
            "<div class='education'><h3>{}</h3><p>{}</p><span class='year'>{}</span></div>",
            escape_xml(ed.degree),
            escape_xml(ed.institution),
            escape_xml(ed.year)
        );
    }
    out
}

/// One tilting showcase card. The frontend binds a tilt surface to every
/// `.project-card`.
pub fn project_card_html(project: &Project) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        "<div class='project-slot'><div class='project-card' data-project-id='{}'>",
        project.id
    );
    _ = write!(
        out,
        "<div class='project-image'><img src='{}' alt='{}'/></div>",
        escape_xml(project.image),
        escape_xml(project.title)
    );
    _ = write!(
        out,
        "<span class='project-category'>{}</span><h3 class='project-title'>{}</h3>",
        escape_xml(project.category),
        escape_xml(project.title)
    );
    _ = write!(
        out,
        "<div class='project-description'><p>{}</p></div>",
        escape_xml(project.description)
    );
    out.push_str("<div class='project-tech'>");
    for t in project.tech {
        _ = write!(out, "<span class='tech-badge'>{}</span>", escape_xml(t));
    }
    out.push_str("</div><div class='project-hint'>Click to Inspect</div></div></div>");
    out
}

pub fn project_grid_html(projects: &[Project]) -> String {
    projects.iter().map(project_card_html).collect()
}

/// Per-category bars, limited to the first `per_category` skills.
pub fn skill_bars_html(categories: &[SkillCategory], per_category: usize) -> String {
    let mut out = String::new();
    for cat in categories {
        _ = write!(
            out,
            "<div class='skill-group'><h4><span class='icon icon-{}'></span>{}</h4>",
            escape_xml(cat.icon),
            escape_xml(cat.title)
        );
        for skill in cat.top_skills(per_category) {
            _ = write!(
                out,
                "<div class='skill-bar'><div class='skill-bar-head'><span>{}</span><span>{}%</span></div>\
                 <div class='skill-bar-track'><div class='skill-bar-fill' style='width:{}%'></div></div></div>",
                escape_xml(skill.name),
                skill.level,
                skill.level
            );
        }
        out.push_str("</div>");
    }
    out
}

/// Experience entries. Each article is a plain tilt card.
pub fn experience_html(entries: &[Experience]) -> String {
    let mut out = String::new();
    for e in entries {
        _ = write!(
            out,
            "<article class='experience card-3d'><h3>{}</h3><p class='meta'>{} · {} · {}</p><ul>",
            escape_xml(e.role),
            escape_xml(e.company),
            escape_xml(e.period),
            escape_xml(e.location)
        );
        for line in e.description {
            _ = write!(out, "<li>{}</li>", escape_xml(line));
        }
        out.push_str("</ul></article>");
    }
    out
}

/// Resume body: header with contact line, profile summary, experience,
/// education, volunteering and a flat skill list.
pub fn resume_html(
    info: &PersonalInfo,
    experience: &[Experience],
    education: &[Education],
    volunteering: &[Volunteering],
    skills: &[SkillCategory],
) -> String {
    let mut out = String::new();
    _ = write!(
        out,
        "<header class='resume-header'><h1>{}</h1><h2>{}</h2><div class='resume-contact'>\
         <span>{}</span><span>{}</span><span>{}</span><span>{}</span></div></header>",
        escape_xml(info.name),
        escape_xml(info.title),
        escape_xml(info.location),
        escape_xml(info.email),
        escape_xml(display_url(info.linkedin)),
        escape_xml(display_url(info.github))
    );
    _ = write!(
        out,
        "<section class='resume-summary'><h2>Profile Summary</h2><p>{}</p></section>",
        escape_xml(info.bio)
    );
    out.push_str("<section class='resume-experience'><h2>Experience</h2>");
    out.push_str(&experience_html(experience));
    out.push_str("</section><section class='resume-education'><h2>Education</h2>");
    for ed in education {
        _ = write!(
            out,
            "<p><strong>{}</strong>, {} ({})</p>",
            escape_xml(ed.degree),
            escape_xml(ed.institution),
            escape_xml(ed.year)
        );
    }
    out.push_str("</section><section class='resume-volunteering'><h2>Volunteering</h2>");
    for v in volunteering {
        _ = write!(
            out,
            "<p><strong>{}</strong>, {} ({})</p>",
            escape_xml(v.role),
            escape_xml(v.organization),
            escape_xml(v.year)
        );
    }
    out.push_str("</section><section class='resume-skills'><h2>Skills</h2>");
    for cat in skills {
        let names: Vec<&str> = cat.skills.iter().map(|s| s.name).collect();
        _ = write!(
            out,
            "<p><strong>{}:</strong> {}</p>",
            escape_xml(cat.title),
            escape_xml(&names.join(", "))
        );
    }
    out.push_str("</section>");
    out
}
