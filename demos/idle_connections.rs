use poll_deadline::{DeadlineTracker, TimeValue};

fn main() {
    // Enable logs
    env_logger::init();

    // One tracker per simulated connection, each with a 5 second idle timeout
    let mut connections: Vec<(u32, DeadlineTracker)> = (0..4)
        .map(|id| (id, DeadlineTracker::with_timeout_micros(5_000_000)))
        .collect();

    // Drive a synthetic clock one second per tick. Connection 0 sees activity
    // on every tick; the rest stay idle and get swept when their window closes.
    for tick in 1u64..=10 {
        let now = TimeValue::new(tick, 0);
        for (id, tracker) in &mut connections {
            if *id == 0 {
                tracker.set_now(now);
                continue;
            }
            if tracker.check_and_advance_on_timeout(now) {
                println!("tick {tick}: connection {id} idle too long, dropping");
            }
        }
    }
}
