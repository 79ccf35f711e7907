use bit_array::{BitArray, BitArrayError, bit_array};

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: Packing and editing
    example_packing();

    // Example 2: Masks with bitwise combinators
    if let Err(err) = example_masks() {
        println!("  error: {err}");
    }

    // Example 3: Handing storage to a sparse converter
    if let Err(err) = example_sparse_handoff() {
        println!("  error: {err}");
    }
}

fn example_packing() {
    println!("Example 1: Seven flags in one byte-sized word");

    let mut flags = bit_array![u8; true, false, true, false, false, false, true];
    println!("  bits: {flags}  words: {:?}  excess: {}", flags.words(), flags.excess());

    flags.push(true);
    flags.insert(1, true).unwrap();
    println!("  after push + insert: {flags}  words: {:?}", flags.words());

    let first = flags.remove_first().unwrap();
    println!("  removed first ({first}), now {flags}");

    match flags.remove_first_n(100) {
        Err(err) => println!("  refused: {err}"),
        Ok(()) => unreachable!(),
    }
    println!();
}

fn example_masks() -> Result<(), BitArrayError> {
    println!("Example 2: Combining equal-length masks");

    let online: BitArray = (0..70).map(|i| i % 3 != 0).collect();
    let healthy = BitArray::from_true_indices((0..70).step_by(2), 70)?;

    let serving = online.bitwise_and(&healthy)?;
    let degraded = &online ^ &serving;

    println!("  serving:  {} of {}", serving.count_true(), serving.len());
    println!("  degraded: {} (first at {:?})", degraded.count_true(), degraded.first_true());
    println!("  offline:  {}", (!&online).count_true());

    let short = BitArray::repeating(true, 69);
    if let Err(err) = online.bitwise_or(&short) {
        println!("  refused: {err}");
    }
    println!();

    Ok(())
}

fn example_sparse_handoff() -> Result<(), BitArrayError> {
    println!("Example 3: Sparse round trip through packed words");

    let dense = BitArray::<u16>::from_bools(&[false, true, false, false, true, true]);
    let positions: Vec<usize> = dense.true_indices().collect();
    println!("  true positions: {positions:?}");
    println!("  raw bytes: {:?}", dense.as_bytes());

    let rebuilt = BitArray::<u16>::from_true_indices(positions, dense.len())?;
    println!("  rebuilt equal: {}", rebuilt == dense);

    let reversed: Vec<bool> = rebuilt.iter().rev().collect();
    println!("  reversed: {reversed:?}");

    Ok(())
}
