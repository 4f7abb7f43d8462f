#![cfg(target_arch = "wasm32")]
use folio_core::{
    about_html, contact_html, education_html, experience_html, hero_html, project_grid_html,
    project_radar, radar_svg, resume_html, skill_bars_html, validate, RadarLayout, EDUCATION,
    EXPERIENCE, PERSONAL_INFO, PROJECTS, RADAR_SIZE, SKILLS, SKILL_BARS_PER_CATEGORY,
    VOLUNTEERING,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cards;
mod constants;
mod dom;
mod events;
mod frame;
mod transform;
mod view;

use constants::{
    ABOUT_CONTAINER_ID, CONTACT_CONTAINER_ID, EDUCATION_CONTAINER_ID, EXPERIENCE_CONTAINER_ID,
    HERO_CONTAINER_ID, PROJECTS_CONTAINER_ID, RADAR_CONTAINER_ID, RESUME_CONTAINER_ID,
    SKILL_BARS_CONTAINER_ID,
};

/// Fill the data-driven containers. Project cards must exist before tilt
/// surfaces are collected.
fn render_sections(document: &web::Document) -> anyhow::Result<()> {
    if let Err(e) = validate(SKILLS) {
        log::warn!("[content] {}", e);
    }
    dom::set_inner_html(document, HERO_CONTAINER_ID, &hero_html(&PERSONAL_INFO));
    dom::set_inner_html(document, ABOUT_CONTAINER_ID, &about_html(&PERSONAL_INFO));
    let layout = RadarLayout::for_size(RADAR_SIZE);
    let chart = project_radar(SKILLS, &layout)?;
    dom::set_inner_html(
        document,
        RADAR_CONTAINER_ID,
        &radar_svg(&chart, SKILLS, RADAR_SIZE),
    );
    dom::set_inner_html(
        document,
        SKILL_BARS_CONTAINER_ID,
        &skill_bars_html(SKILLS, SKILL_BARS_PER_CATEGORY),
    );
    if !dom::set_inner_html(document, PROJECTS_CONTAINER_ID, &project_grid_html(PROJECTS)) {
        return Err(anyhow::anyhow!("missing #{}", PROJECTS_CONTAINER_ID));
    }
    dom::set_inner_html(document, EXPERIENCE_CONTAINER_ID, &experience_html(EXPERIENCE));
    dom::set_inner_html(document, EDUCATION_CONTAINER_ID, &education_html(EDUCATION));
    dom::set_inner_html(document, CONTACT_CONTAINER_ID, &contact_html(&PERSONAL_INFO));
    dom::set_inner_html(
        document,
        RESUME_CONTAINER_ID,
        &resume_html(&PERSONAL_INFO, EXPERIENCE, EDUCATION, VOLUNTEERING, SKILLS),
    );
    log::info!(
        "[radar] axes={} values=[{}]",
        chart.axis_count(),
        chart
            .points
            .iter()
            .map(|p| format!("{:.1}", p.value))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    render_sections(&document)?;
    view::show(&document, view::current(&document));

    let cards: cards::SharedCards = Rc::new(RefCell::new(cards::collect(&document)));
    events::wire_tilt_handlers(&cards);
    events::wire_navigation(&document);
    events::wire_global_keydown(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(cards)));
    frame::start_loop(frame_ctx);
    Ok(())
}
