use squarepack::{Heuristic, Size};
use structopt::StructOpt;

use crate::sprite_spec::{parse_size, SpriteSpec};

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs sprite rectangles into texture atlas bins")]
pub struct Options {
    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack a set of sprite sizes into as few, as small square bins as
    /// possible. Prints every bin and where each sprite landed in it.
    Pack(PackOptions),

    /// Tell whether one rectangle fits inside another, and whether it needs
    /// to be rotated to do so.
    Fit(FitOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The largest width and height any bin may have.
    #[structopt(long, default_value = "1024")]
    pub max_side: u32,

    /// How finely to search for the smallest bin. Smaller values pack tighter
    /// but take longer.
    #[structopt(long, default_value = "128")]
    pub discard_step: u32,

    /// Only try these heuristics, in the given order. Defaults to all of
    /// them: area, perimeter, max-side, width, height.
    #[structopt(long = "heuristic", parse(try_from_str = parse_heuristic))]
    pub heuristics: Vec<Heuristic>,

    /// Find the smallest power-of-two square, up to --max-side, that holds
    /// every sprite in a single atlas instead of spilling into more bins.
    #[structopt(long)]
    pub single: bool,

    /// The sprites to pack, written as [NAME=]WIDTHxHEIGHT, like hero=32x48.
    #[structopt(required = true)]
    pub sprites: Vec<SpriteSpec>,
}

#[derive(Debug, StructOpt)]
pub struct FitOptions {
    /// The rectangle to fit, written as WIDTHxHEIGHT.
    #[structopt(parse(try_from_str = parse_size))]
    pub candidate: Size,

    /// The rectangle to fit it into, written as WIDTHxHEIGHT.
    #[structopt(parse(try_from_str = parse_size))]
    pub container: Size,
}

fn parse_heuristic(value: &str) -> Result<Heuristic, String> {
    Heuristic::ALL
        .iter()
        .copied()
        .find(|heuristic| heuristic.to_string() == value)
        .ok_or_else(|| {
            String::from(
                "Invalid heuristic. Valid options are 'area', 'perimeter', 'max-side', 'width' and 'height'.",
            )
        })
}
