use barwriter::BitMatrix;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

/// Prints `bits` with true-color blocks. The matrix carries its own quiet
/// zone, so nothing is added around it.
pub fn display_bits(bits: &BitMatrix) {
    for y in 0..bits.height() {
        for x in 0..bits.width() {
            print!("{}", if bits.is_set(x, y) { BLACK } else { WHITE });
        }
        println!();
    }
    println!("\x1B[0m");
}
