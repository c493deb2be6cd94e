// SPDX-License-Identifier: MIT

//! Ticker tests on a paused tokio clock: elapsed time advances at 1 Hz
//! while a session is in progress and stops the moment it completes.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{advance, Duration};

use fitmind::models::{Workout, WorkoutCategory};
use fitmind::services::{SessionRunner, SessionState, SessionTicker};

fn test_workout(exercises: &[&str]) -> Workout {
    Workout {
        id: "8".to_string(),
        title: "Core Strength".to_string(),
        description: "Test".to_string(),
        duration: "20 mins".to_string(),
        difficulty: "Medium".to_string(),
        category: WorkoutCategory::Physical,
        benefits: vec![],
        exercises: exercises.iter().map(|s| s.to_string()).collect(),
        quote: None,
        quote_author: None,
    }
}

#[tokio::test(start_paused = true)]
async fn test_ticker_advances_elapsed_once_per_second() {
    let runner = Arc::new(Mutex::new(SessionRunner::new(test_workout(&[
        "Plank (60 seconds)",
        "Crunches (20 reps)",
    ]))));
    runner.lock().await.start();

    let _ticker = SessionTicker::spawn(runner.clone());

    // No full second has passed yet.
    advance(Duration::from_millis(500)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 0);

    advance(Duration::from_millis(4500)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_stops_counting_after_completion() {
    let runner = Arc::new(Mutex::new(SessionRunner::new(test_workout(&[
        "Plank (60 seconds)",
    ]))));
    runner.lock().await.start();

    let _ticker = SessionTicker::spawn(runner.clone());

    advance(Duration::from_secs(3)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 3);

    assert_eq!(runner.lock().await.advance(), SessionState::Completed);

    advance(Duration::from_secs(10)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_does_not_tick_before_start() {
    let runner = Arc::new(Mutex::new(SessionRunner::new(test_workout(&[
        "Plank (60 seconds)",
    ]))));

    let _ticker = SessionTicker::spawn(runner.clone());

    advance(Duration::from_secs(5)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stop_halts_the_timer() {
    let runner = Arc::new(Mutex::new(SessionRunner::new(test_workout(&[
        "Plank (60 seconds)",
    ]))));
    runner.lock().await.start();

    let ticker = SessionTicker::spawn(runner.clone());
    advance(Duration::from_secs(2)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 2);

    ticker.stop();
    advance(Duration::from_secs(5)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_ticker_aborts_the_task() {
    let runner = Arc::new(Mutex::new(SessionRunner::new(test_workout(&[
        "Plank (60 seconds)",
    ]))));
    runner.lock().await.start();

    {
        let _ticker = SessionTicker::spawn(runner.clone());
        advance(Duration::from_secs(2)).await;
    }

    advance(Duration::from_secs(5)).await;
    assert_eq!(runner.lock().await.elapsed_secs(), 2);
}
