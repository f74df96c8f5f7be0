//! Synthetic link telemetry. Nothing here measures a real network path.

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;

use super::constants::{DOWNLOAD_SPEED, LATENCY, UPLOAD_SPEED};
use super::types::ConnectionMetrics;

/// Draws a fresh metrics record. Every field is independent of any earlier draw.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> ConnectionMetrics {
    ConnectionMetrics {
        download_speed: round_tenth(rng.gen_range(DOWNLOAD_SPEED)),
        upload_speed: round_tenth(rng.gen_range(UPLOAD_SPEED)),
        latency: rng.gen_range(LATENCY),
        timestamp: isoformat(now),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Local wall-clock time without offset, microseconds only when non-zero:
/// `2024-05-01T13:45:10.123456` or `2024-05-01T13:45:10`.
pub fn isoformat(dt: NaiveDateTime) -> String {
    // leap seconds are reported as nanoseconds >= 1e9
    let micros = (dt.nanosecond() % 1_000_000_000) / 1_000;

    let seconds = dt.format("%Y-%m-%dT%H:%M:%S");
    if micros == 0 {
        seconds.to_string()
    } else {
        format!("{}.{:06}", seconds, micros)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use rand::{rngs::mock::StepRng, rngs::StdRng, SeedableRng};

    use super::*;

    fn at(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(13, 45, 10, micro)
            .unwrap()
    }

    #[test]
    fn isoformat_with_microseconds() {
        assert_eq!(isoformat(at(123_456)), "2024-05-01T13:45:10.123456");
        assert_eq!(isoformat(at(7)), "2024-05-01T13:45:10.000007");
    }

    #[test]
    fn isoformat_drops_zero_fraction() {
        assert_eq!(isoformat(at(0)), "2024-05-01T13:45:10");
    }

    #[test]
    fn isoformat_parses_back() {
        let dt = at(500_000);

        assert_eq!(isoformat(dt).parse::<NaiveDateTime>().unwrap(), dt);
    }

    #[test]
    fn zero_source_hits_lower_bounds() {
        let metrics = sample(&mut StepRng::new(0, 0), at(0));

        assert_eq!(
            metrics,
            ConnectionMetrics {
                download_speed: 80.0,
                upload_speed: 40.0,
                latency: 8,
                timestamp: "2024-05-01T13:45:10".into(),
            }
        );
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(228);

        for _ in 0..10_000 {
            let metrics = sample(&mut rng, at(1));

            assert!(DOWNLOAD_SPEED.contains(&metrics.download_speed));
            assert!(UPLOAD_SPEED.contains(&metrics.upload_speed));
            assert!(LATENCY.contains(&metrics.latency));
            assert_eq!(round_tenth(metrics.download_speed), metrics.download_speed);
            assert_eq!(round_tenth(metrics.upload_speed), metrics.upload_speed);
        }
    }

    #[test]
    fn latency_covers_whole_range() {
        let mut rng = StdRng::seed_from_u64(1);

        let seen: HashSet<u32> = (0..5_000).map(|_| sample(&mut rng, at(0)).latency).collect();

        assert_eq!(seen, LATENCY.collect::<HashSet<_>>());
    }

    #[test]
    fn consecutive_draws_vary() {
        let mut rng = rand::thread_rng();

        let speeds: HashSet<u64> = (0..100)
            .map(|_| sample(&mut rng, at(0)).download_speed.to_bits())
            .collect();

        assert!(speeds.len() > 1);
    }

    #[test]
    fn same_seed_same_metrics() {
        let first = sample(&mut StdRng::seed_from_u64(7), at(0));
        let second = sample(&mut StdRng::seed_from_u64(7), at(0));

        assert_eq!(first, second);
    }
}
