use barwriter::high_level::encode_high_level;
use barwriter::Compaction;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let contents = args.next().unwrap_or_else(|| "PDF417 demo 2024-01-31 0123456789012345".to_owned());
    let charset = args.next();

    println!("{contents:?}");
    for compaction in [Compaction::Auto, Compaction::Text, Compaction::Byte, Compaction::Numeric] {
        match encode_high_level(&contents, compaction, charset.as_deref()) {
            Ok(codewords) => println!("{compaction:?} ({} codewords): {codewords:?}", codewords.len()),
            Err(e) => println!("{compaction:?}: {e}"),
        }
    }
}
