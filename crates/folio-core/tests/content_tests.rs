// Host-side tests for the static content tables.

use folio_core::*;

#[test]
fn bundled_content_validates() {
    assert_eq!(validate(SKILLS), Ok(()));
    assert_eq!(SKILLS.len(), 4);
    assert_eq!(PROJECTS.len(), 3);
    assert!(!EXPERIENCE.is_empty());
    assert!(!EDUCATION.is_empty());
    assert!(!VOLUNTEERING.is_empty());
    assert!(!PERSONAL_INFO.roles.is_empty());
}

#[test]
fn aggregate_is_mean_level() {
    // Enterprise Solutions: 88, 85, 90, 85
    assert!((SKILLS[2].aggregate() - 87.0).abs() < 1e-12);
}

#[test]
fn empty_category_aggregates_to_zero() {
    let cat = SkillCategory {
        title: "Empty",
        icon: "cpu",
        skills: &[],
    };
    assert_eq!(cat.aggregate(), 0.0);
    assert!(cat.top_skills(4).is_empty());
}

#[test]
fn short_label_is_first_word() {
    assert_eq!(SKILLS[0].short_label(), "AI");
    assert_eq!(SKILLS[3].short_label(), "Tools");
}

#[test]
fn top_skills_truncates() {
    let top = SKILLS[0].top_skills(SKILL_BARS_PER_CATEGORY);
    assert_eq!(top.len(), 4);
    assert_eq!(top[0].name, "Python");
    assert_eq!(SKILLS[2].top_skills(10).len(), 4);
}

#[test]
fn validation_reports_bad_entries() {
    let too_high = SkillCategory {
        title: "Broken",
        icon: "cpu",
        skills: &[Skill {
            name: "Overclocked",
            level: 120,
        }],
    };
    assert_eq!(
        validate(&[too_high]),
        Err(ContentError::LevelOutOfRange {
            category: "Broken",
            skill: "Overclocked",
            level: 120,
        })
    );

    let blank = SkillCategory {
        title: "  ",
        icon: "cpu",
        skills: &[],
    };
    assert_eq!(
        validate(&[SKILLS[0], blank]),
        Err(ContentError::BlankTitle { index: 1 })
    );

    let nameless = SkillCategory {
        title: "Named",
        icon: "cpu",
        skills: &[Skill { name: "", level: 10 }],
    };
    assert_eq!(
        validate(&[nameless]),
        Err(ContentError::BlankSkillName { category: "Named" })
    );
}
