pub mod greet;

use clap::Parser;

#[derive(Parser)]
#[command(name = "greetr")]
#[command(about = "A tiny terminal greeting checker.")]
pub struct CommandLine {
    /// Left operand of the arithmetic check
    #[arg(long, default_value_t = 4)]
    pub lhs: i32,

    /// Right operand of the arithmetic check
    #[arg(long, default_value_t = 2)]
    pub rhs: i32,

    /// Who to greet once the pleasantries are over
    #[arg(long, default_value = "world")]
    pub name: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_the_original_literals() {
        let args = CommandLine::parse_from(["greetr"]);
        assert_eq!(args.lhs, 4);
        assert_eq!(args.rhs, 2);
        assert_eq!(args.name, "world");
    }

    #[test]
    fn operands_and_name_can_be_overridden() {
        let args = CommandLine::parse_from(["greetr", "--lhs", "5", "--name", "rustaceans"]);
        assert_eq!(args.lhs, 5);
        assert_eq!(args.rhs, 2);
        assert_eq!(args.name, "rustaceans");
    }
}
