use clap::Parser;
use mersenne::prng::mt19937::MT19937;
use mersenne::prng::Prng;
use mersenne::utils::bytes::bytes_to_hex;

#[derive(Parser, Debug)]
#[command(name = "mt19937")]
#[command(about = "Print the first outputs of a seeded MT19937 generator", long_about = None)]
struct Args {
    /// Seed for the generator
    #[arg(short, long, default_value_t = 42)]
    seed: u32,

    /// Number of 32-bit outputs to draw
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Print outputs as zero-padded hex words
    #[arg(long)]
    hex: bool,

    /// Print the little-endian byte stream of the outputs as one hex string
    #[arg(long, conflicts_with = "hex")]
    bytes: bool,
}

fn main() {
    let args = Args::parse();

    let mut prng = MT19937::new(args.seed);

    if args.bytes {
        let stream: Vec<u8> = (0..args.count * 4).map(|_| prng.gen_rand_byte()).collect();
        println!("{}", bytes_to_hex(&stream[..]));
        return;
    }

    println!("First {} MT19937 outputs for seed {}:", args.count, args.seed);
    for y in prng.iter().take(args.count) {
        if args.hex {
            println!("{:08x}", y);
        } else {
            println!("{}", y);
        }
    }
}
