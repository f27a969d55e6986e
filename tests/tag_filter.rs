mod helpers;

use std::collections::HashMap;

use crossterm::event::KeyCode;
use helpers::{SCENARIO_CATALOG, TestContext};

use folio::app::Focus;
use folio::config::Config;

#[test]
fn vocabulary_is_sorted_and_deduplicated() {
    let ctx = TestContext::new();
    assert_eq!(
        ctx.app.vocabulary(),
        ["EMNLP2025", "eval_metric", "evaluation", "github", "published"]
    );
    ctx.verify_invariants();
}

#[test]
fn no_filter_shows_whole_catalog_in_order() {
    let ctx = TestContext::new();
    assert!(!ctx.app.filter_active());
    assert_eq!(ctx.visible_ids(), vec!["1", "2", "3"]);
    assert!(ctx.screen_contains("CREPE"));
    assert!(ctx.screen_contains("Multimodal DDx"));
}

#[test]
fn single_tag_narrows_list() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    ctx.toggle_chip("eval_metric");

    assert!(ctx.app.filter_active());
    assert_eq!(ctx.visible_ids(), vec!["P1"]);
    assert!(ctx.screen_contains("Metric One"));
    assert!(!ctx.screen_contains("Benchmark Two"));
    ctx.verify_invariants();
}

#[test]
fn tags_combine_with_and_logic() {
    let mut ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    ctx.toggle_chip("eval_metric");
    ctx.toggle_chip("github");
    assert_eq!(ctx.visible_ids(), vec!["P1"]);

    ctx.toggle_chip("github");
    ctx.toggle_chip("evaluation");
    assert!(ctx.visible_ids().is_empty());
    assert!(ctx.screen_contains("No projects match the selected tags."));
    ctx.verify_invariants();
}

#[test]
fn toggling_chip_twice_restores_list() {
    let mut ctx = TestContext::new();
    ctx.toggle_chip("published");
    assert_eq!(ctx.visible_ids(), vec!["1"]);

    ctx.press(KeyCode::Char(' '));
    assert!(!ctx.app.filter_active());
    assert_eq!(ctx.visible_ids(), vec!["1", "2", "3"]);
    ctx.verify_invariants();
}

#[test]
fn c_clears_every_selected_tag() {
    let mut ctx = TestContext::new();
    ctx.toggle_chip("eval_metric");
    ctx.toggle_chip("github");
    assert_eq!(ctx.app.selected_tags().len(), 2);

    ctx.press(KeyCode::Char('c'));
    assert!(ctx.app.selected_tags().is_empty());
    assert_eq!(ctx.visible_ids(), vec!["1", "2", "3"]);
    ctx.verify_invariants();
}

#[test]
fn escape_on_tag_bar_clears_filter() {
    let mut ctx = TestContext::new();
    ctx.toggle_chip("evaluation");
    ctx.press(KeyCode::Esc);
    assert!(!ctx.app.filter_active());
}

#[test]
fn summary_lists_tags_in_selection_order() {
    let mut ctx = TestContext::new();
    assert!(!ctx.screen_contains("Filtered by:"));

    ctx.toggle_chip("github");
    ctx.toggle_chip("eval_metric");

    let summary = ctx
        .render_tags()
        .into_iter()
        .find(|l| l.starts_with("Filtered by:"))
        .expect("summary line");
    assert!(summary.contains("github, eval_metric"));
    assert!(ctx.screen_contains("(2 selected)"));
}

#[test]
fn chips_render_every_tag() {
    let ctx = TestContext::new();
    let tags = ctx.render_tags();
    for tag in ctx.app.vocabulary() {
        assert!(tags.iter().any(|l| l.contains(&format!(" {tag} "))));
    }
}

#[test]
fn chip_rows_wrap_to_width() {
    let content = (0..30)
        .map(|i| format!("[[project]]\nid = \"p{i}\"\nname = \"P{i}\"\ntags = [\"tag-number-{i}\"]\n"))
        .collect::<String>();
    let ctx = TestContext::with_catalog(&content);
    let tags = ctx.render_tags();
    assert!(tags.len() > 2);
    assert!(tags.iter().all(|l| unicode_width::UnicodeWidthStr::width(l.as_str()) <= 76));
}

#[test]
fn cursor_chip_and_summary_stay_on_small_screen() {
    let content = (0..30)
        .map(|i| format!("[[project]]\nid = \"p{i}\"\nname = \"P{i}\"\ntags = [\"tag{i:02}\"]\n"))
        .collect::<String>();
    let mut ctx = TestContext::with_catalog(&content);
    ctx.press(KeyCode::Tab);
    ctx.press(KeyCode::Char('G'));
    ctx.press(KeyCode::Char(' '));

    let screen = ctx.render_screen(40, 10);
    assert!(screen.iter().any(|row| row.contains("tag29")));
    assert!(screen.iter().any(|row| row.contains("Filtered by: tag29")));
    assert!(screen.iter().any(|row| row.contains("Filter by tags (1 selected)")));
    assert!(screen.iter().any(|row| row.contains("P29")));

    ctx.press(KeyCode::Char('g'));
    let screen = ctx.render_screen(40, 10);
    assert!(screen.iter().any(|row| row.contains("tag00")));
    assert!(!screen.iter().any(|row| row.contains("tag28")));
    assert!(screen.iter().any(|row| row.contains("Filtered by: tag29")));
    ctx.verify_invariants();
}

#[test]
fn project_cards_show_tag_badges() {
    let ctx = TestContext::with_catalog(SCENARIO_CATALOG);
    assert!(ctx.screen_contains("#eval_metric #github"));
    assert!(ctx.screen_contains("#evaluation"));
}

#[test]
fn favorite_tag_digit_toggles_tag() {
    let mut favorite_tags = HashMap::new();
    favorite_tags.insert("1".to_string(), "evaluation".to_string());
    let config = Config {
        favorite_tags,
        ..Default::default()
    };
    let mut ctx = TestContext::with_config_and_catalog(config, SCENARIO_CATALOG);

    ctx.press(KeyCode::Char('1'));
    assert_eq!(ctx.visible_ids(), vec!["P2"]);
    assert_eq!(ctx.app.current_tag(), Some("evaluation"));

    ctx.press(KeyCode::Char('1'));
    assert_eq!(ctx.visible_ids(), vec!["P1", "P2"]);

    ctx.press(KeyCode::Char('2'));
    assert!(ctx.status_contains("No favorite tag on 2"));
    ctx.verify_invariants();
}

#[test]
fn unused_favorite_tag_filters_everything_out() {
    let mut favorite_tags = HashMap::new();
    favorite_tags.insert("3".to_string(), "not-in-catalog".to_string());
    let config = Config {
        favorite_tags,
        ..Default::default()
    };
    let mut ctx = TestContext::with_config_and_catalog(config, SCENARIO_CATALOG);

    ctx.press(KeyCode::Char('3'));
    assert!(ctx.app.filter_active());
    assert!(ctx.visible_ids().is_empty());
    ctx.verify_invariants();
}

#[test]
fn tab_switches_focus() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.app.focus, Focus::Projects);
    ctx.press(KeyCode::Tab);
    assert_eq!(ctx.app.focus, Focus::Tags);
    ctx.press(KeyCode::Tab);
    assert_eq!(ctx.app.focus, Focus::Projects);
}

#[test]
fn tag_cursor_stops_at_ends() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Tab);
    ctx.press(KeyCode::Char('h'));
    assert_eq!(ctx.app.tag_cursor, 0);

    ctx.press(KeyCode::Char('G'));
    ctx.press(KeyCode::Char('l'));
    assert_eq!(ctx.app.tag_cursor, ctx.app.vocabulary().len() - 1);
    ctx.verify_invariants();
}

#[test]
fn filter_only_reruns_when_selection_changes() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    assert_eq!(ctx.app.filter_runs(), 0);

    ctx.toggle_chip("github");
    let runs = ctx.app.filter_runs();
    ctx.press(KeyCode::Tab);
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Char('k'));
    assert_eq!(ctx.app.filter_runs(), runs);
}

#[test]
fn empty_catalog_has_no_tags_or_projects() {
    let ctx = TestContext::with_catalog("");
    assert!(ctx.app.vocabulary().is_empty());
    assert!(ctx.screen_contains("No tags in this catalog."));
    assert!(ctx.screen_contains("The catalog is empty."));
    ctx.verify_invariants();
}
