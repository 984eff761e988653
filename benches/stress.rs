use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use innkeep::engine::Engine;
use innkeep::model::User;
use innkeep::notify::NotifyHub;

const YEAR: i32 = 2100;
const ROOMS: u32 = 200;
const STAYS_PER_ROOM: u32 = 60;

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.3}ms, p50={:.3}ms, p95={:.3}ms, p99={:.3}ms, max={:.3}ms",
        latencies.len(),
        avg.as_secs_f64() * 1000.0,
        percentile(latencies, 50.0).as_secs_f64() * 1000.0,
        percentile(latencies, 95.0).as_secs_f64() * 1000.0,
        percentile(latencies, 99.0).as_secs_f64() * 1000.0,
        latencies.last().unwrap().as_secs_f64() * 1000.0,
    );
}

fn setup() -> Arc<Engine> {
    let engine = Arc::new(Engine::new("stress", Arc::new(NotifyHub::new())));
    engine.add_floor(1, false, vec![]).unwrap();
    for n in 0..ROOMS {
        engine.add_room(n, 1, 1).unwrap();
    }
    engine
}

#[tokio::main]
async fn main() {
    let engine = setup();
    println!("reserve stress: {ROOMS} rooms x {STAYS_PER_ROOM} one-day stays");

    let wall = Instant::now();
    let mut handles = Vec::new();
    for room in 0..ROOMS {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let mut latencies = Vec::with_capacity(STAYS_PER_ROOM as usize);
            for stay in 0..STAYS_PER_ROOM {
                // every stay occupies two days: 1..=2, 3..=4, ...
                let start = NaiveDate::from_yo_opt(YEAR, stay * 2 + 1).unwrap();
                let t = Instant::now();
                engine
                    .reserve(room, start, 1, vec![], User::new("Load", "Tester"))
                    .await
                    .expect("reserve failed");
                latencies.push(t.elapsed());
            }
            latencies
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.await.unwrap());
    }
    let elapsed = wall.elapsed();

    print_latency("reserve", &mut all);
    let total = (ROOMS * STAYS_PER_ROOM) as f64;
    println!(
        "  throughput: {:.0} reserves/s ({} bookings in {:.2}s)",
        total / elapsed.as_secs_f64(),
        engine.booking_count(),
        elapsed.as_secs_f64(),
    );
}
