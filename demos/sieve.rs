use fermat_grid::{primes, PrimeSieve};

fn main() {
    println!("primes(10)  = {:?}", primes(10));
    println!("primes(3)   = {:?}", primes(3));
    println!("primes(2)   = {:?}", primes(2));

    let sieve = PrimeSieve::new(1080);
    println!("{} primes below {}", sieve.count(), sieve.bound());
    println!("largest: {:?}", sieve.iter().last());
}
