use super::*;

fn settings(f: impl FnOnce(&mut PlaybackSettings)) -> PlaybackSettings {
    let mut s = PlaybackSettings::default();
    f(&mut s);
    s
}

#[test]
fn single_forward_run_ends_on_the_last_frame() {
    let s = PlaybackSettings::default();
    assert_eq!(
        compute_playback(1000.0, 1000.0, &s, false),
        Playback {
            t: 1000.0,
            done: true
        }
    );
    assert_eq!(
        compute_playback(250.0, 1000.0, &s, false),
        Playback {
            t: 250.0,
            done: false
        }
    );
}

#[test]
fn infinite_runs_never_finish() {
    let s = settings(|s| s.iterations = Iterations::Infinite);
    for g in [0.0, 999.0, 1000.0, 1.0e9] {
        assert!(!compute_playback(g, 1000.0, &s, false).done);
    }
    assert_eq!(compute_playback(2500.0, 1000.0, &s, false).t, 500.0);
}

#[test]
fn zero_duration_is_done_at_zero() {
    let s = PlaybackSettings::default();
    assert_eq!(
        compute_playback(40.0, 0.0, &s, false),
        Playback { t: 0.0, done: true }
    );
}

#[test]
fn reverse_direction_runs_backwards() {
    let s = settings(|s| s.direction = Direction::Reverse);
    assert_eq!(compute_playback(200.0, 1000.0, &s, false).t, 800.0);
    assert_eq!(compute_playback(1000.0, 1000.0, &s, false).t, 0.0);
    assert_eq!(compute_playback(200.0, 1000.0, &s, true).t, 200.0);
}

#[test]
fn alternate_flips_odd_iterations() {
    let s = settings(|s| {
        s.alternate = true;
        s.iterations = Iterations::Count(2.0);
    });
    assert_eq!(compute_playback(300.0, 1000.0, &s, false).t, 300.0);
    assert_eq!(compute_playback(1300.0, 1000.0, &s, false).t, 700.0);
    // An even count of alternating runs ends where it started.
    assert_eq!(compute_playback(2000.0, 1000.0, &s, false).t, 0.0);
}

#[test]
fn backwards_fill_rests_at_the_start() {
    let s = settings(|s| s.fill = FillMode::Backwards);
    assert_eq!(compute_playback(5000.0, 1000.0, &s, false).t, 0.0);
    assert_eq!(compute_playback(5000.0, 1000.0, &s, true).t, 1000.0);
}

#[test]
fn speed_scales_elapsed_time() {
    let s = settings(|s| {
        s.speed = 2.0;
        s.iterations = Iterations::Count(3.0);
    });
    assert_eq!(compute_playback(600.0, 1000.0, &s, false).t, 200.0);
    assert!(compute_playback(1500.0, 1000.0, &s, false).done);
}
