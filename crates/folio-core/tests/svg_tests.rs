// Host-side tests for radar SVG markup.

use folio_core::*;
use glam::DVec2;

#[test]
fn points_attr_formats_pairs() {
    let pts = [DVec2::new(1.0, 2.5), DVec2::new(-3.126, 4.0)];
    assert_eq!(points_attr(&pts), "1.00,2.50 -3.13,4.00");
    assert_eq!(points_attr(&[]), "");
}

#[test]
fn chart_has_one_point_and_label_per_axis() {
    let chart = project_radar(SKILLS, &RadarLayout::default()).unwrap();
    let svg = radar_svg(&chart, SKILLS, RADAR_SIZE);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), SKILLS.len());
    assert_eq!(svg.matches("class='radar-axis'").count(), SKILLS.len());
    assert_eq!(svg.matches("class='radar-label'").count(), SKILLS.len());
    assert!(svg.contains(">87%<"), "enterprise aggregate label missing");
    assert!(svg.contains(">Tools<"));
    assert!(svg.contains("class='radar-bg'"));
    assert!(svg.contains("class='radar-data'"));
}

#[test]
fn labels_are_escaped() {
    let cats = [SkillCategory {
        title: "R&D <lab>",
        icon: "cpu",
        skills: &[Skill { name: "x", level: 50 }],
    }];
    let chart = project_radar(&cats, &RadarLayout::default()).unwrap();
    let svg = radar_svg(&chart, &cats, RADAR_SIZE);
    assert!(svg.contains(">R&amp;D<"));
}

#[test]
fn empty_chart_renders_empty_svg() {
    let chart = project_radar(&[], &RadarLayout::default()).unwrap();
    let svg = radar_svg(&chart, &[], RADAR_SIZE);
    assert!(!svg.contains("<polygon"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn escape_xml_handles_quotes() {
    assert_eq!(escape_xml("a'b\"c"), "a&#39;b&quot;c");
}
