/// Subtracts `b` from `a`.
pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_minus_two_is_two() {
        assert_eq!(subtract(4, 2), 2);
    }

    #[test]
    fn subtraction_is_ordered() {
        assert_eq!(subtract(2, 4), -2);
    }

    #[test]
    fn handles_negatives_and_zero() {
        assert_eq!(subtract(-3, -7), 4);
        assert_eq!(subtract(0, 0), 0);
        assert_eq!(subtract(5, 0), 5);
    }
}
