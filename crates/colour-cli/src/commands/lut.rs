//! LUT inspection and conversion commands

use crate::{LutApplyArgs, LutConvertArgs, LutInfoArgs};
use anyhow::{Context, Result};
use colour_lut::{cube, Lut};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

fn load(path: &std::path::Path) -> Result<Lut> {
    cube::read_cube(path).with_context(|| format!("Failed to load LUT: {}", path.display()))
}

pub fn run_info(args: LutInfoArgs) -> Result<()> {
    let lut = load(&args.input)?;
    let [min, max] = lut.domain();

    println!("{} - {}", lut.kind(), lut.name());
    println!("Size       : {}", lut.size());
    println!("Domain     : {:?}", min);
    println!("             {:?}", max);
    for (i, comment) in lut.comments().iter().enumerate() {
        println!("Comment {:02} : {}", i + 1, comment);
    }
    Ok(())
}

pub fn run_convert(args: LutConvertArgs, verbose: u8) -> Result<()> {
    let mut lut = load(&args.input)?;

    if let Some(title) = args.title {
        match &mut lut {
            Lut::Lut1D(l) => l.name = title,
            Lut::Lut3x1D(l) => l.name = title,
            Lut::Lut3D(l) => l.name = title,
        }
    }

    info!(kind = lut.kind(), size = lut.size(), decimals = args.decimals, "Converting LUT");
    cube::write_cube(&args.output, &lut, args.decimals)
        .with_context(|| format!("Failed to write LUT: {}", args.output.display()))?;

    if verbose > 0 {
        println!("Wrote {}", args.output.display());
    }
    Ok(())
}

pub fn run_apply(args: LutApplyArgs) -> Result<()> {
    let lut = load(&args.input)?;
    let rgb = super::triplet(&args.rgb, "--rgb")?;
    let out = lut.apply(rgb);
    debug!(?rgb, ?out, "lut::run_apply");
    println!("{:.7} {:.7} {:.7}", out[0], out[1], out[2]);
    Ok(())
}
