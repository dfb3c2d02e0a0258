mod utils;

use barwriter::{BarcodeFormat, Code39Writer, EncodeHints, Writer};
use utils::display_bits;

fn main() {
    env_logger::init();

    let contents = std::env::args().nth(1).unwrap_or_else(|| "Hello, Code 39!".to_owned());
    let hints = EncodeHints::default().with_margin(8);
    match Code39Writer::new().encode(&contents, BarcodeFormat::Code39, 0, 6, &hints) {
        Ok(bits) => display_bits(&bits),
        Err(e) => eprintln!("cannot encode {contents:?}: {e}"),
    }
}
