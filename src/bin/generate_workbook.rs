//! Generate a deterministic demo workbook for `calibra`.
//!
//! Writes `workbook.json` with three noisy calibration lines.  The fourth
//! expected sample (`Amostra4`) is left out on purpose so the analyzer's
//! missing-sample path shows up in the demo output, and each sheet starts
//! with a header row plus one malformed row to exercise row skipping.

use serde_json::{Map, Value, json};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_table(slope: f64, intercept: f64, noise: f64, rng: &mut SimpleRng) -> Value {
    let mut rows = vec![json!(["concentracao", "absorbancia"])];
    for i in 0..10 {
        let x = 0.5 + i as f64 * 0.5;
        let y = slope * x + intercept + rng.gauss(0.0, noise);
        rows.push(json!([x, y]));
    }
    // One over-wide row the extractor must skip.
    rows.push(json!(["replicata", 1.0, 2.0]));
    Value::Array(rows)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (sheet, slope, intercept, noise); Amostra4 deliberately absent.
    let samples = [
        ("Amostra1", 2.0, 0.1, 0.02),
        ("Amostra2", 1.5, 0.3, 0.05),
        ("Amostra3", 0.8, -0.2, 0.10),
    ];

    let mut tables = Map::new();
    for &(name, slope, intercept, noise) in &samples {
        tables.insert(
            name.to_string(),
            generate_table(slope, intercept, noise, &mut rng),
        );
    }

    let output_path = "workbook.json";
    let text = serde_json::to_string_pretty(&Value::Object(tables))
        .expect("Failed to serialize workbook");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!(
        "Wrote {} tables (10 points each) to {output_path}",
        samples.len()
    );
}
