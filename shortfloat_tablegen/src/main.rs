//! Regenerates the precomputed power-of-five tables in `shortfloat`.
//!
//! The table values are fully determined by the kernel's shift parameters;
//! this tool recomputes them with exact big-integer arithmetic and rewrites
//! the two generated source files. Run it from the workspace root after
//! changing a table's dimensions or layout:
//!
//! ```text
//! cargo run -p shortfloat_tablegen
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use num_bigint::BigUint;
use tracing::info;

// Fixed scale of each table's entries, in bits. The inverse tables serve
// non-negative binary exponents, the forward tables negative ones.
const FLOAT_POW5_INV_BITCOUNT: u64 = 59;
const FLOAT_POW5_BITCOUNT: u64 = 61;
const DOUBLE_POW5_INV_BITCOUNT: u64 = 122;
const DOUBLE_POW5_BITCOUNT: u64 = 121;

// Table lengths cover every reachable exponent: q up to
// floor(log10(2^e2_max)), i up to -e2_min - floor(log10(5^-e2_min)), plus
// one forward entry of lookahead for the early-exit removed digit.
const FLOAT_INV_LEN: u32 = 31;
const FLOAT_LEN: u32 = 48;
const DOUBLE_INV_LEN: u32 = 292;
const DOUBLE_LEN: u32 = 326;

#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the generated table modules
    #[arg(short, long, default_value = "shortfloat/src")]
    out_dir: PathBuf,
}

const HEADER: &str = "//\n// GENERATED FILE - regenerate with `cargo run -p shortfloat_tablegen`.\n//\n";

fn pow5(e: u32) -> BigUint {
    BigUint::from(5u32).pow(e)
}

/// `ceil(log2(5^e))`, or 1 for `e == 0`. Exact, unlike the kernel's
/// multiply-shift approximation (which a test below checks against this).
fn pow5_bits(e: u32) -> u64 {
    // 5^e is never a power of two, so the bit length is the ceiling.
    pow5(e).bits()
}

/// Inverse entry: `ceil(2^(bitcount + pow5_bits(q) - 1) / 5^q)`.
fn inv_entry(q: u32, bitcount: u64) -> BigUint {
    let p = pow5(q);
    let num = BigUint::from(1u32) << (bitcount + pow5_bits(q) - 1) as usize;
    (&num + &p - BigUint::from(1u32)) / &p
}

/// Forward entry: `floor(5^i / 2^(pow5_bits(i) - bitcount))`; the shift is
/// negative (a multiplication) for small `i`.
fn fwd_entry(i: u32, bitcount: u64) -> BigUint {
    let p = pow5(i);
    let shift = pow5_bits(i) as i64 - bitcount as i64;
    if shift >= 0 {
        &p >> shift as usize
    } else {
        &p << (-shift) as usize
    }
}

fn render_u64_table(name: &str, entries: &[BigUint]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "pub(crate) static {}: [u64; {}] = [\n",
        name,
        entries.len()
    ));
    for v in entries {
        let v = u64::try_from(v).expect("entry exceeds 64 bits");
        out.push_str(&format!("    0x{v:016x},\n"));
    }
    out.push_str("];\n");
    out
}

fn render_u128_table(name: &str, entries: &[BigUint]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "pub(crate) static {}: [(u64, u64); {}] = [\n",
        name,
        entries.len()
    ));
    for v in entries {
        let v = u128::try_from(v).expect("entry exceeds 128 bits");
        let (lo, hi) = (v as u64, (v >> 64) as u64);
        out.push_str(&format!("    (0x{lo:016x}, 0x{hi:016x}),\n"));
    }
    out.push_str("];\n");
    out
}

fn render_f2s_tables() -> String {
    let inv: Vec<_> = (0..FLOAT_INV_LEN)
        .map(|q| inv_entry(q, FLOAT_POW5_INV_BITCOUNT))
        .collect();
    let fwd: Vec<_> = (0..FLOAT_LEN)
        .map(|i| fwd_entry(i, FLOAT_POW5_BITCOUNT))
        .collect();

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&render_u64_table("FLOAT_POW5_INV_SPLIT", &inv));
    out.push('\n');
    out.push_str(&render_u64_table("FLOAT_POW5_SPLIT", &fwd));
    out
}

fn render_d2s_tables() -> String {
    let inv: Vec<_> = (0..DOUBLE_INV_LEN)
        .map(|q| inv_entry(q, DOUBLE_POW5_INV_BITCOUNT))
        .collect();
    let fwd: Vec<_> = (0..DOUBLE_LEN)
        .map(|i| fwd_entry(i, DOUBLE_POW5_BITCOUNT))
        .collect();

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&render_u128_table("DOUBLE_POW5_INV_SPLIT", &inv));
    out.push('\n');
    out.push_str(&render_u128_table("DOUBLE_POW5_SPLIT", &fwd));
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    for (filename, contents) in [
        ("f2s_full_table.rs", render_f2s_tables()),
        ("d2s_full_table.rs", render_d2s_tables()),
    ] {
        let path = cli.out_dir.join(filename);
        std::fs::write(&path, &contents).context(format!("writing {path:?}"))?;
        info!("wrote {} ({} lines)", path.display(), contents.lines().count());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_log_approximation_matches_exact_bits() {
        // The kernel computes pow5 bit counts as ((e * 1217359) >> 19) + 1;
        // the generator must agree with it everywhere the kernel uses it.
        for e in 0..=3528u32 {
            let approx = ((e as u64 * 1217359) >> 19) + 1;
            assert_eq!(approx, pow5_bits(e), "e = {e}");
        }
    }

    #[test]
    fn inverse_entries_start_at_the_scale_power() {
        // q = 0 divides exactly, so the ceiling is the power of two itself.
        assert_eq!(
            inv_entry(0, FLOAT_POW5_INV_BITCOUNT),
            BigUint::from(1u32) << 59usize
        );
        assert_eq!(
            inv_entry(0, DOUBLE_POW5_INV_BITCOUNT),
            BigUint::from(1u32) << 122usize
        );
    }

    #[test]
    fn entries_stay_in_their_normalized_range() {
        // Forward entries are 5^i normalized into [2^(b-1), 2^b); inverse
        // entries land in (2^(b-1), 2^b], so their bit length is b except
        // for the exact power of two at q = 0.
        for i in 0..FLOAT_LEN {
            assert_eq!(fwd_entry(i, FLOAT_POW5_BITCOUNT).bits(), FLOAT_POW5_BITCOUNT, "i = {i}");
        }
        for i in 0..DOUBLE_LEN {
            assert_eq!(fwd_entry(i, DOUBLE_POW5_BITCOUNT).bits(), DOUBLE_POW5_BITCOUNT, "i = {i}");
        }
        for q in 1..FLOAT_INV_LEN {
            assert_eq!(inv_entry(q, FLOAT_POW5_INV_BITCOUNT).bits(), FLOAT_POW5_INV_BITCOUNT, "q = {q}");
        }
        for q in 1..DOUBLE_INV_LEN {
            assert_eq!(inv_entry(q, DOUBLE_POW5_INV_BITCOUNT).bits(), DOUBLE_POW5_INV_BITCOUNT, "q = {q}");
        }
    }

    #[test]
    fn rendering_shape() {
        let table = render_u64_table("T", &[BigUint::from(0x12u32)]);
        assert_eq!(table, "pub(crate) static T: [u64; 1] = [\n    0x0000000000000012,\n];\n");
        let wide = render_u128_table("W", &[BigUint::from(1u128 << 64)]);
        assert_eq!(
            wide,
            "pub(crate) static W: [(u64, u64); 1] = [\n    (0x0000000000000000, 0x0000000000000001),\n];\n"
        );
    }
}
