use intdist::{CumulativeSampler, WeightedTable};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash)]
enum Rarity {
    Mythic,
    Legendary,
    Uncommon,
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = WeightedTable::from_pairs([
        (Rarity::Mythic, 1.0 / 1000.0),
        (Rarity::Legendary, 1.0 / 100.0),
        (Rarity::Uncommon, 20.0 / 100.0),
        (Rarity::Common, 50.0 / 100.0),
    ])?;
    let mut hist: HashMap<Rarity, u64> = HashMap::default();

    // Plain indices work the same way:
    let dice = CumulativeSampler::new(&[1.0, 1.0, 1.0, 1.0, 1.0, 2.0])?;

    // Seeded, so every run prints the same histogram.
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..2_000_000 {
        *hist.entry(table.sample_owned(&mut rng)).or_default() += 1;
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    for (rarity, count) in values {
        let index = table.items().iter().position(|r| *r == rarity).unwrap_or(0);
        let expected = table.sampler().probability(index).unwrap_or(0.0);
        println!("{count: >7} {rarity:?} (expected {:.4})", expected);
    }

    let rolls: Vec<usize> = (0..10).map(|_| dice.sample_index(&mut rng) + 1).collect();
    println!("loaded d6: {rolls:?}");

    Ok(())
}
