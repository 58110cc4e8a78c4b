use std::path::PathBuf;

use workout_stats::read_package;

const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
struct SessionCsv {
    workout_type: String,
    action: f64,
    duration: f64,
    weight: f64,
    height: Option<f64>,
    pool_length: Option<f64>,
    pool_laps: Option<f64>,
}

impl SessionCsv {
    fn into_package(self) -> (String, Vec<f64>) {
        let SessionCsv {
            workout_type,
            action,
            duration,
            weight,
            height,
            pool_length,
            pool_laps,
        } = self;

        let mut data = vec![action, duration, weight];
        data.extend([height, pool_length, pool_laps].into_iter().flatten());

        (workout_type, data)
    }
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with one session per row. Reports the built-in sample batch when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

fn load_packages(path: PathBuf) -> Result<Vec<(String, Vec<f64>)>, Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(&path)
        .map_err(|e| format!("Failed to read input file. Reason: {e}"))?;

    Ok(rdr
        .deserialize::<SessionCsv>()
        .filter_map(|this| this.ok())
        .map(SessionCsv::into_package)
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args { input } = <Args as clap::Parser>::parse();

    let packages = match input {
        Some(path) => load_packages(path)?,
        None => SAMPLE_PACKAGES
            .into_iter()
            .map(|(workout_type, data)| (workout_type.to_owned(), data.to_vec()))
            .collect(),
    };

    let mut failed = 0_usize;

    for (workout_type, data) in packages {
        match read_package(&workout_type, &data) {
            Ok(workout) => println!("{}", workout.summary()),
            Err(e) => {
                eprintln!("Skipping package: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} package(s) could not be processed").into());
    }

    Ok(())
}
