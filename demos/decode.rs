//! Decode VINs given on the command line.
//!
//! ```sh
//! cargo run --example decode -- 1HGCM82633A004352 WBA3A5C50DF123456
//! ```

use vindecode::Vin;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: decode <VIN>...");
        std::process::exit(2);
    }

    for raw in &args {
        let vin = Vin::new(raw);
        println!("{}", vin.report());
        if let Err(e) = vin.validate() {
            println!("error:        {e}");
        }
        println!();
    }
}
