use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fv_viewer::data::loader::FileLayout;

/// Write synthetic .fv measurement files for trying out the viewer.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Cli {
    /// Output directory
    #[arg(long, short = 'o', default_value = ".")]
    out: PathBuf,

    /// Number of files to write
    #[arg(long, short = 'n', default_value_t = 4)]
    files: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Phase velocity of a simple dispersion curve: fast at low frequency,
/// settling towards `v_high`.
fn dispersion(freq: f64, v_low: f64, v_high: f64, corner: f64) -> f64 {
    v_high + (v_low - v_high) * (-freq / corner).exp()
}

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

/// Render one file: fixed header, `<frequency> <velocity>` rows, fixed trailer.
fn render_file(name: &str, rows: &[(f64, f64)], layout: FileLayout) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "# FV export: {name}");
    for i in 1..layout.header_lines {
        let _ = writeln!(text, "# header line {i}");
    }
    for &(f, v) in rows {
        let _ = writeln!(text, "{f:.1} {v:.3}");
    }
    for i in 0..layout.trailer_lines {
        let _ = writeln!(text, "# trailer line {i}");
    }
    text
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let layout = FileLayout::default();
    let mut rng = SimpleRng::new(cli.seed);

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;

    // Shared 1 Hz grid so overlapping frequencies get averaged.
    let frequencies: Vec<f64> = (1..=60).map(f64::from).collect();

    for idx in 0..cli.files {
        let name = format!("line_{:02}.fv", idx + 1);
        let v_low = rng.gauss(420.0, 25.0);
        let v_high = rng.gauss(180.0, 10.0);
        let corner = rng.gauss(12.0, 2.0).max(2.0);

        // Each file covers a slightly different band.
        let start = idx * 3;
        let rows: Vec<(f64, f64)> = frequencies
            .iter()
            .skip(start)
            .take(40)
            .map(|&f| (f, dispersion(f, v_low, v_high, corner) + rng.gauss(0.0, 4.0)))
            .collect();

        let path = cli.out.join(&name);
        std::fs::write(&path, render_file(&name, &rows, layout))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {} rows to {}", rows.len(), path.display());
    }

    Ok(())
}
