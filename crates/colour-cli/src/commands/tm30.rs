//! TM-30-18 report command

use crate::Tm30Args;
use anyhow::{Context, Result};
use colour_core::SpectralDistribution;
use colour_quality::tm3018::HUE_BIN_COUNT;
use colour_quality::{
    colour_fidelity_index_ansi_ies_tm3018, ColourQualitySpecification, ColourRenderingSpecification,
    PrecomputedFidelity, Tm3018Output,
};
use serde::Deserialize;
use std::fmt::Write;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Input document: the tested SPD and its CIE 2017 colorimetry.
#[derive(Debug, Deserialize)]
pub struct Tm30Input {
    pub sd_test: SpectralDistribution,
    pub cie2017: ColourRenderingSpecification,
}

pub fn run(args: Tm30Args, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "tm30::run");
    let input: Tm30Input = super::load_json(&args.input)?;
    let base = PrecomputedFidelity::new(input.cie2017).context("Inconsistent CIE 2017 data")?;

    info!(name = %input.sd_test.name, samples = base.as_specification().sample_count(), "Computing TM-30-18");
    let output = colour_fidelity_index_ansi_ies_tm3018(&input.sd_test, &base, !args.fidelity_only)
        .context("TM-30-18 computation failed")?;

    let text = match &output {
        Tm3018Output::FidelityIndex(r_f) => format!("R_f = {:.7}\n", r_f),
        Tm3018Output::Specification(spec) if args.json => serde_json::to_string_pretty(spec)? + "\n",
        Tm3018Output::Specification(spec) => report(spec, verbose > 0),
    };

    super::emit(args.output.as_deref(), &text)
}

/// Plain-text summary of a specification.
pub fn report(spec: &ColourQualitySpecification, with_samples: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", spec.name);
    let _ = writeln!(out, "{}", "-".repeat(spec.name.chars().count().max(1)));
    let _ = writeln!(out, "R_f  : {:.2}", spec.r_f);
    let _ = writeln!(out, "R_g  : {:.2}", spec.r_g);
    let _ = writeln!(out, "CCT  : {:.0} K", spec.cct);
    let _ = writeln!(out, "D_uv : {:.4}", spec.d_uv);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>4} {:>8} {:>8} {:>8} {:>8}", "bin", "count", "R_fs", "R_cs %", "R_hs");
    for bin in 0..HUE_BIN_COUNT {
        let _ = writeln!(
            out,
            "{:>4} {:>8} {:>8.1} {:>8.1} {:>8.3}",
            bin + 1,
            spec.bins[bin].len(),
            spec.r_fs[bin],
            spec.r_cs[bin],
            spec.r_hs[bin]
        );
    }
    if with_samples {
        let _ = writeln!(out);
        for (sample, r_s) in spec.colorimetry_data.0.iter().zip(&spec.r_s) {
            let _ = writeln!(out, "{:>8} {:>8.1}", sample.name, r_s);
        }
    }
    out
}
