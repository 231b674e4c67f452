use anyhow::{Result, bail};
use clap::Parser;
use roomgen::{Region, SeededSource, SplitPolicy, layout_fingerprint, partition};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed; each generated map derives its own stream seed from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Root region width
    #[arg(long, default_value_t = 64)]
    width: i32,
    /// Root region height
    #[arg(long, default_value_t = 48)]
    height: i32,
    /// Smallest acceptable room width
    #[arg(long, default_value_t = 5)]
    min_width: i32,
    /// Smallest acceptable room height
    #[arg(long, default_value_t = 5)]
    min_height: i32,
    /// Number of independent maps to generate
    #[arg(short, long, default_value_t = 1)]
    count: u64,
    /// Axis policy: "random" or "alternating"
    #[arg(short, long, default_value = "random")]
    policy: String,
    /// Emit each map's room list as a JSON array instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let policy = match args.policy.as_str() {
        "random" => SplitPolicy::Random,
        "alternating" => SplitPolicy::Alternating,
        other => bail!("unknown policy {other:?}, expected \"random\" or \"alternating\""),
    };

    let root = Region::new(0, 0, args.width, args.height);
    for map_index in 0..args.count {
        let mut rng = SeededSource::for_stream(args.seed, map_index);
        let rooms = partition(root, args.min_width, args.min_height, policy, &mut rng)?;

        if args.json {
            println!("{}", serde_json::to_string(&rooms)?);
        } else {
            println!(
                "map {map_index}: {} rooms, fingerprint {}",
                rooms.len(),
                layout_fingerprint(&rooms)
            );
            for room in &rooms {
                println!("  {}x{} at ({}, {})", room.width, room.height, room.x, room.y);
            }
        }
    }

    Ok(())
}
