use anyhow::Result;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use roomgen::{Region, SeededSource, SplitPolicy, partition};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    cases: u64,
}

fn pick(rng: &mut ChaCha8Rng, lo: i32, hi: i32) -> i32 {
    lo + (rng.next_u64() % (hi - lo + 1) as u64) as i32
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut total_rooms = 0_usize;
    let mut empty_maps = 0_u64;

    for case in 0..args.cases {
        let width = pick(&mut rng, 1, 80);
        let height = pick(&mut rng, 1, 80);
        let min_width = pick(&mut rng, 1, 10);
        let min_height = pick(&mut rng, 1, 10);
        let policy = if rng.next_u64() & 1 == 0 {
            SplitPolicy::Random
        } else {
            SplitPolicy::Alternating
        };

        let root = Region::new(0, 0, width, height);
        let mut source = SeededSource::for_stream(args.seed, case);
        let rooms = partition(root, min_width, min_height, policy, &mut source)
            .expect("fuzz produced invalid arguments");

        // Assert invariants
        for (index, room) in rooms.iter().enumerate() {
            assert!(
                room.width >= min_width && room.height >= min_height,
                "case {case}: room {room:?} below minimum {min_width}x{min_height}"
            );
            assert!(root.contains_region(room), "case {case}: room {room:?} escapes {root:?}");
            for other in &rooms[index + 1..] {
                assert!(!room.overlaps(other), "case {case}: {room:?} overlaps {other:?}");
            }
        }

        if rooms.is_empty() {
            empty_maps += 1;
        }
        total_rooms += rooms.len();
    }

    println!(
        "All {} cases passed: {} rooms checked, {} degenerate (empty) maps.",
        args.cases, total_rooms, empty_maps
    );
    Ok(())
}
