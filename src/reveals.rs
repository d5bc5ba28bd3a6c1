use crate::animate::{Animator, OnEnter, Track};
use crate::constants::*;
use crate::core::*;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade the hero copy in, one child after another.
pub fn hero_entrance(animator: &mut Animator, hero_left: &web::Element) {
    let tracks: Vec<Track> = dom::html_children(hero_left)
        .into_iter()
        .enumerate()
        .map(|(i, el)| {
            let tween = Tween::new(
                Pose::hidden_below(HERO_ENTRANCE_OFFSET_PX),
                Pose::REST,
                HERO_ENTRANCE_SEC,
                Ease::Power3Out,
            )
            .delayed(stagger(i, HERO_ENTRANCE_STAGGER_SEC));
            Track::new(el, tween)
        })
        .collect();
    log::info!("[reveal] hero entrance over {} elements", tracks.len());
    animator.play_now(tracks);
}

/// Register a reveal for every project card. Returns how many were found.
pub fn project_reveals(animator: &mut Animator, document: &web::Document) -> usize {
    let projects = dom::query_all(document, PROJECT_SELECTOR);
    for project in &projects {
        let mut tracks = Vec::new();
        if let Some(card) = project.dyn_ref::<web::HtmlElement>() {
            tracks.push(Track::new(
                card.clone(),
                Tween::new(
                    Pose::hidden_below(PROJECT_OFFSET_PX),
                    Pose::REST,
                    PROJECT_REVEAL_SEC,
                    Ease::Power3Out,
                ),
            ));
        }
        match dom::query_in(project, PROJECT_MEDIA_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            Some(media) => tracks.push(Track::new(
                media,
                Tween::new(
                    Pose::scaled(PROJECT_MEDIA_FROM_SCALE),
                    Pose::REST,
                    PROJECT_MEDIA_SEC,
                    Ease::Power3Out,
                ),
            )),
            None => log::warn!("[reveal] project without {}", PROJECT_MEDIA_SELECTOR),
        }
        match dom::query_in(project, PROJECT_INFO_SELECTOR) {
            Some(info) => {
                for (i, el) in dom::html_children(&info).into_iter().enumerate() {
                    let tween = Tween::new(
                        Pose::hidden_below(PROJECT_INFO_OFFSET_PX),
                        Pose::REST,
                        PROJECT_INFO_SEC,
                        Ease::Power3Out,
                    )
                    .delayed(stagger(i, PROJECT_INFO_STAGGER_SEC));
                    tracks.push(Track::new(el, tween));
                }
            }
            None => log::warn!("[reveal] project without {}", PROJECT_INFO_SELECTOR),
        }
        animator.play_on_scroll(project.clone(), PROJECT_REVEAL_THRESHOLD, tracks, None);
    }
    projects.len()
}

/// Reveal the about portrait and run `on_enter` when the about section
/// scrolls into view.
pub fn about_reveal(
    animator: &mut Animator,
    document: &web::Document,
    section: web::Element,
    on_enter: OnEnter,
) {
    let tracks: Vec<Track> = dom::query_all(document, ABOUT_PORTRAIT_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            Track::new(
                el,
                Tween::new(
                    Pose::hidden_below(PORTRAIT_OFFSET_PX),
                    Pose::REST,
                    PORTRAIT_REVEAL_SEC,
                    Ease::Power3Out,
                ),
            )
        })
        .collect();
    animator.play_on_scroll(section, ABOUT_REVEAL_THRESHOLD, tracks, Some(on_enter));
}
