//! Integration tests for sessions, rendering and export.
//!
//! These tests verify cross-component behavior that unit tests don't cover.

use std::fs;
use std::time::Duration;

use lrutrace::export::{steps_from_json, write_snapshot, write_trace_json};
use lrutrace::render::{render_step, StepView};
use lrutrace::{PageId, SimulationConfig, SimulationSession};
use tempfile::tempdir;

const TEXTBOOK: &str = "1,2,3,4,1,2,5,1,2,3,4,5";

/// Parse → simulate → navigate, with bad input corrected along the way.
#[test]
fn test_user_input_to_session() {
    let session = SimulationSession::from_input("1, 2, three, 3", -2, None).unwrap();

    assert_eq!(session.trace().capacity(), 3);
    assert_eq!(session.trace().len(), 3);
    assert_eq!(session.warnings().len(), 1);
    assert_eq!(session.current().map(|s| s.current_page), Some(PageId(1)));
}

/// Walking forward then back reproduces the same rendered frames.
#[test]
fn test_back_navigation_rerenders_history() {
    let mut session = SimulationSession::from_input(TEXTBOOK, 3, None).unwrap();
    let capacity = session.trace().capacity();
    let len = session.trace().len();

    let mut forward = Vec::new();
    loop {
        let step = session.current().unwrap();
        forward.push(render_step(step, capacity, len));
        if session.step_forward().is_none() {
            break;
        }
    }

    let mut backward = vec![render_step(session.current().unwrap(), capacity, len)];
    while let Some(step) = session.step_back() {
        backward.push(render_step(step, capacity, len));
    }
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 12);
}

/// Full playback at a fixed period visits every step once, then stops.
#[test]
fn test_playback_runs_to_completion() {
    let config = SimulationConfig {
        capacity: 3,
        playback_period: Duration::from_millis(600),
    };
    let refs: Vec<PageId> = [7, 0, 1, 2, 0, 3].into_iter().map(PageId).collect();
    let mut session = SimulationSession::start(&refs, config).unwrap();

    assert!(session.play());
    let mut visited = vec![session.position()];
    while session.is_playing() {
        if session.tick(Duration::from_millis(600)) > 0 {
            visited.push(session.position());
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
}

/// Export, reload, and compare against the in-memory trace.
#[test]
fn test_export_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("LRU_Execution_Trace.json");

    let session = SimulationSession::from_input(TEXTBOOK, 3, None).unwrap();
    write_trace_json(session.trace(), &path).unwrap();

    let reloaded = steps_from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, session.trace().steps());
    assert_eq!(reloaded.last().map(|s| s.fault_count_so_far), Some(10));
}

/// A snapshot file holds exactly what the renderer shows for the cursor.
#[test]
fn test_snapshot_of_current_step() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snap.txt");

    let mut session = SimulationSession::from_input("1,2,1", 2, None).unwrap();
    session.seek(2).unwrap();

    let trace = session.trace();
    let text = StepView::new(session.current().unwrap(), trace.capacity(), trace.len()).to_string();
    write_snapshot(&text, &path).unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("Step: 3 / 3"));
    assert!(saved.contains("<- hit"));
    assert!(saved.ends_with("Page Hit ✓"));
}

/// Starting a new run discards the old trace wholesale.
#[test]
fn test_new_run_replaces_old_trace() {
    let mut session = SimulationSession::from_input(TEXTBOOK, 3, None).unwrap();
    session.seek(8).unwrap();

    session.restart(&[PageId(1), PageId(1)], 1).unwrap();
    assert_eq!(session.trace().len(), 2);
    assert_eq!(session.trace().total_faults(), 1);
    assert_eq!(session.position(), 0);
}
