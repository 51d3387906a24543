use entropy_binning::{Binner, BinningConfig, bin_array, rank_encode};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("entropy_binning=debug")
        .init();

    // Ages of survey respondents, skewed towards the twenties
    let mut rng = StdRng::seed_from_u64(1);
    let ages: Vec<i32> = (0..200)
        .map(|_| 18 + rng.gen_range(0..6) + rng.gen_range(0..6) * rng.gen_range(0..3))
        .collect();

    for nbins in 2..=4 {
        let outcome = Binner::with_nbins(nbins)
            .search(&ages)
            .expect("ages are integers");
        println!(
            "nbins = {nbins}: {} (entropy {:.4} bits of max {:.4}, {} candidates)",
            outcome.partition,
            outcome.entropy,
            (nbins as f64).log2(),
            outcome.candidates
        );
    }

    // Each row of a small matrix gets its own binning
    let data: Vec<i64> = (0..4 * 12).map(|_| rng.gen_range(0..5)).collect();
    let a = Array2::from_shape_vec((4, 12), data).expect("shape matches data");
    let b = bin_array(&a, 3, Some(1)).expect("rows are binnable");
    println!("Input rows:\n{a}");
    println!("Binned rows:\n{b}");

    // Discrete but non-integer data: rank first, then bin
    let grid = [0.25, 0.5, 0.5, 0.75, 0.75, 0.75, 1.0, 1.0];
    let ranks = rank_encode(&grid).expect("grid values are comparable");
    let binner = Binner::new(BinningConfig::new(2));
    println!("Ranks: {ranks:?}");
    println!("Binned ranks: {:?}", binner.bin_sequence(&ranks).expect("ranks are integers"));
}
