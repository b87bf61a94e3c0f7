use std::fmt::Write as _;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in `lo..hi`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer in `lo..=hi`.
    fn range_i(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo + 1) as u64) as i64
    }
}

/// Six-hourly clock for data-line timestamps, never leaving the safe
/// 28-day window of any month.
struct Clock {
    year: u16,
    month: u32,
    day: u32,
    hour: u32,
}

impl Clock {
    fn stamp(&self) -> (String, String) {
        (
            format!("{:04}{:02}{:02}", self.year, self.month, self.day),
            format!("{:02}00", self.hour),
        )
    }

    fn advance(&mut self) {
        self.hour += 6;
        if self.hour == 24 {
            self.hour = 0;
            self.day += 1;
            if self.day > 28 {
                self.day = 1;
                self.month += 1;
            }
        }
    }
}

/// Storm status code for a data line, from its wind.
fn status(wind: i32) -> &'static str {
    if wind < 34 {
        "TD"
    } else if wind < 64 {
        "TS"
    } else {
        "HU"
    }
}

struct StormSpec {
    id: String,
    name: String,
    lines: Vec<String>,
}

/// Random-walk one storm: genesis in the deep tropics, a west-northwest
/// run with intensification to a peak, then recurvature and decay.
fn generate_storm(rng: &mut SimpleRng, year: u16, ordinal: u32, name: &str) -> StormSpec {
    let id = format!("AL{ordinal:02}{year}");
    let with_pressure = year >= 1979;

    let fixes = rng.range_i(8, 28) as usize;
    let peak_at = fixes / 2;
    let peak_wind = rng.range(35.0, 140.0);

    let mut lat = rng.range(9.0, 20.0);
    let mut lon_west = rng.range(30.0, 70.0); // magnitude, always W
    let mut wind = rng.range(20.0, 30.0);

    let mut clock = Clock {
        year,
        month: rng.range_i(6, 10) as u32,
        day: rng.range_i(1, 20) as u32,
        hour: 6 * rng.range_i(0, 3) as u32,
    };

    let mut lines = Vec::with_capacity(fixes);
    for step in 0..fixes {
        let (date, time) = clock.stamp();
        let wind_kt = (wind.round() as i32).max(10);
        let pressure = if with_pressure {
            1013 - wind_kt + rng.range_i(-4, 4) as i32
        } else {
            -999
        };

        lines.push(format!(
            "{date}, {time},  , {}, {lat:.1}N, {lon_west:.1}W, {wind_kt:>3}, {pressure:>4},",
            status(wind_kt)
        ));

        // Drift: poleward creep, westward run, then recurve eastward.
        lat += rng.range(0.1, 0.5);
        if step < peak_at {
            lon_west += rng.range(0.2, 0.7);
            wind += rng.range(2.0, 12.0).min(peak_wind - wind).max(0.0);
        } else {
            lon_west -= rng.range(0.0, 0.5);
            wind -= rng.range(2.0, 9.0);
        }
        lon_west = lon_west.clamp(15.0, 99.0);
        clock.advance();
    }

    StormSpec {
        id,
        name: name.to_string(),
        lines,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Pre-satellite seasons are unnamed and carry the -999 pressure
    // sentinel; modern seasons use the rotating name list.
    let seasons: [(u16, &[&str]); 5] = [
        (1851, &["UNNAMED", "UNNAMED", "UNNAMED"]),
        (1852, &["UNNAMED", "UNNAMED", "UNNAMED", "UNNAMED"]),
        (1853, &["UNNAMED", "UNNAMED"]),
        (2020, &["ARTHUR", "BERTHA", "CRISTOBAL", "DOLLY", "EDOUARD"]),
        (2021, &["ANA", "BILL", "CLAUDETTE", "DANNY"]),
    ];

    let mut text = String::new();
    let mut storm_total = 0;
    let mut fix_total = 0;

    for (year, names) in seasons {
        for (index, name) in names.iter().enumerate() {
            let storm = generate_storm(&mut rng, year, index as u32 + 1, name);
            writeln!(text, "{},{:>19},{:>7},", storm.id, storm.name, storm.lines.len())?;
            for line in &storm.lines {
                writeln!(text, "{line}")?;
            }
            storm_total += 1;
            fix_total += storm.lines.len();
        }
    }

    let output_dir = std::path::Path::new("sample_data");
    std::fs::create_dir_all(output_dir).context("creating sample_data directory")?;
    let output_path = output_dir.join("hurdat2_sample.txt");
    std::fs::write(&output_path, &text)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {storm_total} storms ({fix_total} observations) across {} seasons to {}",
        seasons.len(),
        output_path.display()
    );
    Ok(())
}
