//! DIN99 colour difference command

use crate::{DeltaEArgs, Scale};
use anyhow::Result;
use colour_core::DomainRangeScale;
use colour_difference::{delta_e_din99, delta_e_din99_batch, Din99Options};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: DeltaEArgs, verbose: u8) -> Result<()> {
    let scale = match args.scale {
        Scale::Reference => DomainRangeScale::Reference,
        Scale::One => DomainRangeScale::One,
    };
    let options = Din99Options {
        textiles: args.textiles,
        scale,
    };

    if let Some(path) = &args.pairs {
        trace!(pairs = %path.display(), "delta_e::run");
        let pairs: Vec<[[f64; 3]; 2]> = super::load_json(path)?;
        let (lab_1, lab_2): (Vec<_>, Vec<_>) = pairs.into_iter().map(|[a, b]| (a, b)).unzip();
        info!(pairs = lab_1.len(), textiles = args.textiles, "Computing DIN99 differences");

        for (i, d) in delta_e_din99_batch(&lab_1, &lab_2, options).iter().enumerate() {
            if verbose > 0 {
                println!("{:>6} {:.7}", i, d);
            } else {
                println!("{:.7}", d);
            }
        }
        return Ok(());
    }

    let lab_1 = super::triplet(&args.lab1, "--lab1")?;
    let lab_2 = super::triplet(&args.lab2, "--lab2")?;
    debug!(?lab_1, ?lab_2, "delta_e::run");
    println!("{:.7}", delta_e_din99(lab_1, lab_2, options));
    Ok(())
}
