use std::{
    io::{self, Write},
    slice,
};

use squarepack::{Heuristic, PackItem, Packer};

use crate::{layout::Layout, options::PackOptions};

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let mut items: Vec<PackItem<String>> = options
        .sprites
        .iter()
        .map(|sprite| PackItem::new(sprite.size, sprite.label().to_owned()))
        .collect();

    let heuristics = if options.heuristics.is_empty() {
        &Heuristic::ALL[..]
    } else {
        &options.heuristics[..]
    };

    let packer = Packer::new()
        .max_side(options.max_side)
        .discard_step(options.discard_step)
        .heuristics(heuristics);

    let layout = if options.single {
        let (side, bin) = packer.pack_single(&mut items)?;
        log::info!("Packed {} sprites into one {}x{} atlas", items.len(), side, side);

        Layout::new(slice::from_ref(&bin), &items)
    } else {
        let output = packer.pack(&mut items)?;
        log::info!(
            "Packed {} sprites into {} bins",
            items.len(),
            output.bins().len()
        );

        Layout::new(output.bins(), &items)
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", layout)?;
    handle.flush()?;

    Ok(())
}
