use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a synthetic launch table as CSV and Parquet.
#[derive(Parser, Debug)]
#[command(about = "Generate sample launch records", long_about = None)]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Number of launches
    #[arg(short = 'n', long, default_value_t = 56)]
    launches: u32,

    #[arg(long, default_value_t = 42)]
    seed: u64,
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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Debug, Serialize)]
struct SampleLaunch {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'static str,
}

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Booster generations in flight order with their success rate.
const GENERATIONS: [(&str, f64); 5] = [
    ("v1.0", 0.2),
    ("v1.1", 0.4),
    ("FT", 0.75),
    ("B4", 0.6),
    ("B5", 0.95),
];

fn generate(args: &Args) -> Vec<SampleLaunch> {
    let mut rng = SimpleRng::new(args.seed);
    (1..=args.launches)
        .map(|flight| {
            let era = (flight - 1) as usize * GENERATIONS.len() / args.launches.max(1) as usize;
            let (category, success_rate) = GENERATIONS[era.min(GENERATIONS.len() - 1)];
            // Later boosters lift heavier payloads.
            let ceiling = 2_000.0 + 2_000.0 * era as f64;
            let payload = (rng.next_f64() * ceiling / 10.0).round() * 10.0;
            SampleLaunch {
                flight_number: flight,
                launch_site: *rng.pick(&SITES),
                class: i64::from(rng.next_f64() < success_rate),
                payload_mass_kg: payload,
                booster_version: format!("F9 {category} B{:04}", 1000 + flight),
                booster_category: category,
            }
        })
        .collect()
}

fn write_csv(path: &Path, launches: &[SampleLaunch]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    for launch in launches {
        writer.serialize(launch).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, launches: &[SampleLaunch]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::UInt32, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, true),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(UInt32Array::from_iter_values(launches.iter().map(|l| l.flight_number))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.launch_site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload_mass_kg))),
            Arc::new(StringArray::from_iter_values(
                launches.iter().map(|l| l.booster_version.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.booster_category))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let launches = generate(&args);

    let csv_path = args.out_dir.join("spacex_launch_dash.csv");
    let parquet_path = args.out_dir.join("spacex_launch_dash.parquet");
    write_csv(&csv_path, &launches)?;
    write_parquet(&parquet_path, &launches)?;

    println!(
        "Wrote {} launches to {} and {}",
        launches.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
