use std::io::{self, Write};

use anyhow::Context;
use colored::*;

use crate::commands::CommandLine;
use crate::{greeting, math};

const GREETED: &str = "Well, hello to you too!";
const SCOLDED: &str = "So rude! You didn't say hi!";
const MATH_WORKED: &str = "It works!";
const MATH_FAILED: &str = "It wasn't 3...";
const MARKER: &str = "Another test!";

/// Runs the whole exchange: one subtraction, one greeting read, then the
/// fixed report on stdout.
pub fn greet(args: &CommandLine) -> anyhow::Result<()> {
    let val: i32 = math::subtract(args.lhs, args.rhs);
    let greeted: bool = greeting::check_greeting()
        .context("failed to read the greeting from the terminal")?;

    Ok(report(args, val, greeted, &mut io::stdout())?)
}

/// Writes the report lines in fixed order.
///
/// A difference of exactly 3 ends the report right after the success line;
/// every other difference falls through to the remaining lines.
fn report<W: Write>(args: &CommandLine, val: i32, greeted: bool, out: &mut W) -> io::Result<()> {
    if greeted {
        writeln!(out, "{}", GREETED.green())?;
    } else {
        writeln!(out, "{}", SCOLDED.red())?;
    }

    if val == 3 {
        writeln!(out, "{}", MATH_WORKED.green().bold())?;
        return Ok(());
    } else {
        writeln!(out, "{}", MATH_FAILED.yellow())?;
    }

    writeln!(out, "Hello, {}!", args.name)?;
    writeln!(out, "{}", MARKER)?;
    writeln!(
        out,
        "Math: {} - {} = {}",
        args.lhs,
        args.rhs,
        math::subtract(args.lhs, args.rhs)
    )?;

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
