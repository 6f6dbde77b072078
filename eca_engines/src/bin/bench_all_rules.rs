use eca_engines::*;

fn bench<E: EcaEngine>(name: &str, width: usize, height: usize) {
    let timer = std::time::Instant::now();
    let mut population = 0;
    for rule in 0..RULE_COUNT as i64 {
        let history =
            evolve_with::<E>(rule, width, height, SeedPolicy::Random { seed: Some(42) }).unwrap();
        population += history.population();
    }
    println!("{}: {:?} (population {})", name, timer.elapsed(), population);
}

fn main() {
    let (width, height) = (4096, 1024);
    bench::<NaiveEngine>("naive", width, height);
    bench::<PackedEngine>("packed", width, height);
}
