use bitmath::{fast_sqrt, inv_sqrt, log2};

/// Print the approximation error of the fast routines against the
/// standard library.
///  cargo run --example approx_table --release

fn main() {
    println!("{:>12} {:>14} {:>14} {:>10}", "x", "fast_sqrt", "sqrt", "rel err");
    for x in [0.25f32, 0.5, 1.0, 2.0, 10.0, 100.0, 12345.0, 1.0e6] {
        let approx = fast_sqrt(x);
        let exact = x.sqrt();
        let rel = ((approx - exact) / exact).abs();
        println!("{:>12} {:>14.7} {:>14.7} {:>10.2e}", x, approx, exact, rel);
    }

    println!();
    println!("{:>12} {:>14} {:>14} {:>10}", "x", "inv_sqrt", "1/sqrt", "rel err");
    for x in [0.25f32, 0.5, 1.0, 2.0, 10.0, 100.0, 12345.0, 1.0e6] {
        let approx = inv_sqrt(x);
        let exact = 1.0 / x.sqrt();
        let rel = ((approx - exact) / exact).abs();
        println!("{:>12} {:>14.7} {:>14.7} {:>10.2e}", x, approx, exact, rel);
    }

    println!();
    println!("{:>12} {:>14} {:>14}", "x", "log2(x)", "std log2");
    for x in [0.5f32, 1.0, 3.0, 8.0, 100.0, 1024.0] {
        println!("{:>12} {:>14.7} {:>14.7}", x, log2(x), x.log2());
    }
}
