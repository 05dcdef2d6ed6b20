// Host-side tests for vote handling and export/reset through the app context.

use bubbles_core::constants::STORAGE_KEY;
use bubbles_core::{
    radius_for_votes, BubbleApp, KeyValueStore, MemoryStore, SimConfig, VoteOutcome, VoteTally,
    GENRES,
};
use chrono::NaiveDate;
use glam::Vec2;

fn make_app() -> BubbleApp<MemoryStore> {
    BubbleApp::new(GENRES, MemoryStore::new(), SimConfig::default())
}

fn vote_on(app: &mut BubbleApp<MemoryStore>, key: &str) -> VoteOutcome {
    let pos = app.sim().body(key).expect("live body").position;
    let outcome = app.pointer_down(pos).expect("pointer hit");
    assert_eq!(outcome.genre_key, key);
    outcome
}

fn at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 31)
        .unwrap()
        .and_hms_opt(23, 59, 1)
        .unwrap()
}

#[test]
fn repeated_votes_grow_body_to_matching_radius() {
    let mut app = make_app();
    // opposite sides of the spawn ring
    let (a, b) = ("house", "drum_bass");
    for n in 1..=5 {
        let out = vote_on(&mut app, a);
        assert_eq!(out.votes, n);
        if n % 2 == 0 {
            vote_on(&mut app, b);
        }
    }
    assert_eq!(app.tally().count(a), 5);
    assert_eq!(app.tally().count(b), 2);
    assert_eq!(app.sim().body(a).unwrap().radius, radius_for_votes(5));
    assert_eq!(app.sim().body(b).unwrap().radius, radius_for_votes(2));
    assert_eq!(app.sim().body_count(), GENRES.len());
}

#[test]
fn vote_kicks_the_body() {
    let mut app = make_app();
    let before = app.sim().body("hardcore").unwrap();
    vote_on(&mut app, "hardcore");
    let after = app.sim().body("hardcore").unwrap();
    assert!(after.velocity.distance(before.velocity) > 1.0);
    assert!(after.position.distance(before.position) < 1e-3);
}

#[test]
fn vote_is_persisted_immediately() {
    let mut app = make_app();
    vote_on(&mut app, "turku");
    let saved = app.votes().store().get(STORAGE_KEY).unwrap();
    assert_eq!(VoteTally::from_json(GENRES, &saved).count("turku"), 1);
}

#[test]
fn pointer_miss_is_a_no_op() {
    let mut app = make_app();
    assert!(app.pointer_down(Vec2::new(-100.0, -100.0)).is_none());
    assert_eq!(app.tally().total(), 0);
    assert!(app.votes().store().get(STORAGE_KEY).is_none());
}

#[test]
fn radii_stay_consistent_while_ticking() {
    let mut app = make_app();
    vote_on(&mut app, "groove");
    for _ in 0..120 {
        app.tick();
    }
    for b in app.sim().bodies() {
        assert_eq!(b.radius, radius_for_votes(app.tally().count(b.genre_key)));
    }
}

#[test]
fn export_writes_csv_then_resets() {
    let mut app = make_app();
    vote_on(&mut app, "house");
    vote_on(&mut app, "house");
    vote_on(&mut app, "drum_bass");

    let mut downloaded = None;
    let file = app.export_and_reset(at(), |f| {
        downloaded = Some(f.clone());
        Ok::<(), String>(())
    });

    assert_eq!(downloaded.as_ref(), Some(&file));
    assert_eq!(file.filename, "genre_votes_20250131_235901.csv");
    assert!(file.contents.contains("house,House,2\r\n"));
    assert!(file.contents.contains("drum_bass,Drum & Bass,1\r\n"));

    assert_eq!(app.tally().total(), 0);
    for b in app.sim().bodies() {
        assert_eq!(b.radius, radius_for_votes(0));
    }
    let saved = app.votes().store().get(STORAGE_KEY).unwrap();
    assert_eq!(VoteTally::from_json(GENRES, &saved).total(), 0);
}

#[test]
fn reset_keeps_motion() {
    let mut app = make_app();
    vote_on(&mut app, "pop");
    let before = app.sim().body("pop").unwrap();
    app.export_and_reset(at(), |_| Ok::<(), String>(()));
    let after = app.sim().body("pop").unwrap();
    assert!(after.position.distance(before.position) < 1e-3);
    assert!(after.velocity.distance(before.velocity) < 1e-3);
}

#[test]
fn failed_download_still_resets() {
    let mut app = make_app();
    vote_on(&mut app, "afro");
    app.export_and_reset(at(), |_| Err("blocked by host"));
    assert_eq!(app.tally().count("afro"), 0);
    assert_eq!(app.sim().body("afro").unwrap().radius, radius_for_votes(0));
}

#[test]
fn labels_cover_every_body() {
    struct FixedAdvance;
    impl bubbles_core::TextMeasure for FixedAdvance {
        fn text_width(&self, text: &str, font_px: u32) -> f32 {
            text.chars().count() as f32 * font_px as f32 * 0.6
        }
    }
    let app = make_app();
    let labels = app.labels(&FixedAdvance);
    assert_eq!(labels.len(), GENRES.len());
    for (p, g) in labels.iter().zip(GENRES) {
        assert_eq!(p.body.genre_key, g.key);
        assert!(!p.layout.lines.is_empty());
    }
}

#[test]
fn teardown_releases_bodies() {
    let mut app = make_app();
    app.teardown();
    assert_eq!(app.sim().body_count(), 0);
    assert_eq!(app.tick(), 0);
    assert!(app.pointer_down(Vec2::new(480.0, 280.0)).is_none());
}

fn still_app() -> BubbleApp<MemoryStore> {
    let config = SimConfig {
        init_speed_min: 0.0,
        init_speed_max: 0.0,
        ..SimConfig::default()
    };
    BubbleApp::new(GENRES, MemoryStore::new(), config)
}

#[test]
fn dragged_body_follows_the_pointer() {
    let mut app = still_app();
    vote_on(&mut app, "house");
    let before = app.sim().body("house").unwrap();
    // the middle of the spawn ring is empty
    let target = app.sim().arena() / 2.0;
    let gap = before.position.distance(target);

    assert_eq!(app.drag_start(before.position), Some("house"));
    app.drag_to(target);
    for _ in 0..15 {
        app.tick();
    }

    let after = app.sim().body("house").unwrap();
    assert!(after.position.distance(target) < gap * 0.5, "{:?}", after.position);
    assert_eq!(after.radius, before.radius);
    assert_eq!(app.tally().count("house"), 1);
    assert_eq!(app.tally().total(), 1);
}

#[test]
fn released_body_keeps_its_fling() {
    let mut app = still_app();
    let start = app.sim().body("trance").unwrap().position;
    app.drag_start(start);
    app.drag_to(app.sim().arena() / 2.0);
    app.tick();
    app.tick();
    assert_eq!(app.drag_end(), Some("trance"));
    assert_eq!(app.dragged(), None);

    app.tick();
    assert!(app.sim().body("trance").unwrap().velocity.length() > 1.0);
}

#[test]
fn drag_on_empty_space_grabs_nothing() {
    let mut app = still_app();
    assert_eq!(app.drag_start(Vec2::new(5.0, 5.0)), None);
    app.drag_to(Vec2::new(100.0, 100.0));
    assert_eq!(app.dragged(), None);
    assert_eq!(app.drag_end(), None);
    assert_eq!(app.tally().total(), 0);
}

#[test]
fn drag_survives_a_vote_resize() {
    let mut app = still_app();
    let pos = app.sim().body("pop").unwrap().position;
    app.drag_start(pos);
    vote_on(&mut app, "pop");
    assert_eq!(app.dragged(), Some("pop"));
    app.tick();
    assert_eq!(app.sim().body("pop").unwrap().radius, radius_for_votes(1));
}
